mod tree_properties;
