#![allow(unused)]
#![cfg(doctest)]

// The nodes can only be added while no handle or iterator borrows the tree, so an iteration
// never observes a partially updated subtree index.

mod borrows {
    /// ```compile_fail,E0502
    /// use indexed_tree::IndexTree;                // | let mut iter = tree.iter();
    ///                                             // |                ---- immutable borrow occurs here
    /// let mut tree = IndexTree::new("root");      // | let root = iter.next().unwrap();
    /// let mut iter = tree.iter();                 // | tree.add_child(root.id(), "a");
    /// let root = iter.next().unwrap();            // | ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ mutable borrow occurs here
    /// tree.add_child(root.id(), "a");             // | let next = iter.next();
    /// let next = iter.next();                     // |            ---- immutable borrow later used here
    /// ```
    fn must_not_compile1() {}

    /// ```compile_fail,E0502
    /// use indexed_tree::IndexTree;
    ///                                             // | let root = tree.root();
    /// let mut tree = IndexTree::new("root");      // |            ---- immutable borrow occurs here
    /// let root = tree.root();                     // | tree.add_child(root.id(), "a");
    /// tree.add_child(root.id(), "a");             // | ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ mutable borrow occurs here
    /// assert!(root.is_leaf());                    // | assert!(root.is_leaf());
    /// ```                                         // |         ---- immutable borrow later used here
    fn must_not_compile2() {}

    /// ```compile_fail,E0502
    /// use indexed_tree::IndexTree;
    ///
    /// let mut tree = IndexTree::new("root");      // | let root = tree.root();
    /// let root = tree.root();                     // |            ---- immutable borrow occurs here
    /// let found = root.find(|_| {                 // | let found = root.find(|_| {
    ///     tree.add_child(root.id(), "a");         // |                       ^^^ mutable borrow occurs here
    ///     true                                    // |     tree.add_child(root.id(), "a");
    /// });                                         // |     ---- second borrow occurs due to use of `tree` in closure
    /// ```
    fn must_not_compile3() {}

    /// ```compile_fail,E0505
    /// use indexed_tree::IndexTree;
    ///
    /// let tree = IndexTree::new("root".to_string()); // | let root = tree.root();
    /// let root = tree.root();                        // |            ---- borrow of `tree` occurs here
    /// drop(tree);                                    // | drop(tree);
    /// println!("value: {}", *root);                  // |      ^^^^ move out of `tree` occurs here
    /// ```
    fn must_not_compile4() {}

    /// ```compile_fail,E0505
    /// use indexed_tree::IndexTree;
    ///
    /// let mut tree = IndexTree::new(0);           // | let mut iter = tree.iter();
    /// tree.add_child(tree.root_id(), 1).unwrap(); // |                ---- borrow of `tree` occurs here
    /// let mut iter = tree.iter();                 // | drop(tree);
    /// let _root = iter.next();                    // |      ^^^^ move out of `tree` occurs here
    /// drop(tree);                                 // | let child = iter.next();
    /// let child = iter.next();                    // |             ---- borrow later used here
    /// ```
    fn must_not_compile5() {}
}
