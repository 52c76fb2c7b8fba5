mod ls_tree;
