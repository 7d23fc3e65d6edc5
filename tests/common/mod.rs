//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};

/// Create a temporary directory for test output.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
    counter: std::cell::Cell<u32>,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self {
            dir,
            repo,
            counter: std::cell::Cell::new(0),
        }
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write a unique file and return the tree containing it.
    fn next_tree(&self) -> git2::Tree<'_> {
        let n = self.counter.get() + 1;
        self.counter.set(n);

        let name = format!("file-{}.txt", n);
        std::fs::write(self.dir.path().join(&name), n.to_string())
            .expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(&name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        self.repo.find_tree(tree_id).expect("Failed to find tree")
    }

    /// Create a commit on HEAD with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();
        let tree = self.next_tree();

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a commit on top of `parent` without moving HEAD.
    pub fn commit_detached(&self, parent: Oid, message: &str) -> Oid {
        let sig = self.signature();
        let tree = self.next_tree();
        let parent = self.repo.find_commit(parent).expect("Failed to find parent");

        self.repo
            .commit(None, &sig, &sig, message, &tree, &[&parent])
            .expect("Failed to create commit")
    }

    /// Create a branch pointing to the given OID.
    pub fn branch(&self, name: &str, oid: Oid) {
        let commit = self.repo.find_commit(oid).expect("Failed to find commit");
        self.repo
            .branch(name, &commit, true)
            .expect("Failed to create branch");
    }
}
