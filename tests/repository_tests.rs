use std::fs;

use assert_fs::prelude::*;
use assert_fs::TempDir;

use demogit::repository::{Commit, Repository, ADD_ALL, IGNORE_FILE, STORE_DIR};
use demogit::{ObjectId, ObjectType};

fn init_repo() -> (TempDir, Repository) {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    (dir, repo)
}

fn read_commit(repo: &Repository, id: &ObjectId) -> Commit {
    let (kind, payload) = repo.store().get(id).unwrap();
    assert_eq!(kind, ObjectType::Commit);
    Commit::parse(&payload).unwrap()
}

#[test]
fn add_all_stages_the_expected_blob_digest() {
    let (dir, repo) = init_repo();
    dir.child("a.txt").write_str("hello").unwrap();

    assert_eq!(repo.add(ADD_ALL).unwrap(), 1);

    let index = repo.index().unwrap();
    assert_eq!(index.entries().len(), 1);
    assert_eq!(index.entries()[0].path, "a.txt");
    // Digest of "blob 5\0hello"
    assert_eq!(
        index.entries()[0].id.to_hex(),
        "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0"
    );
}

#[test]
fn first_commit_is_a_root_and_moves_the_branch() {
    let (dir, repo) = init_repo();
    dir.child("a.txt").write_str("hello").unwrap();
    repo.add(ADD_ALL).unwrap();

    assert!(repo.last_commit().unwrap().is_none());

    let (id, branch) = repo.commit("first").unwrap();
    assert_eq!(branch, "refs/heads/main");
    assert_eq!(repo.last_commit().unwrap(), Some(id.clone()));

    let ref_file = dir.path().join(STORE_DIR).join("refs/heads/main");
    assert_eq!(
        fs::read_to_string(ref_file).unwrap().trim(),
        id.to_hex()
    );

    let commit = read_commit(&repo, &id);
    assert!(commit.parent.is_none());
    assert_eq!(commit.message, "first");
    assert_eq!(commit.author.name, "Demo User");
    assert_eq!(commit.author.email, "demo@example.com");
}

#[test]
fn second_commit_records_the_first_as_parent() {
    let (dir, repo) = init_repo();
    dir.child("a.txt").write_str("hello").unwrap();
    repo.add(ADD_ALL).unwrap();
    let (first, _) = repo.commit("first").unwrap();

    dir.child("b.txt").write_str("world").unwrap();
    repo.add(ADD_ALL).unwrap();
    let (second, _) = repo.commit("second").unwrap();

    assert_ne!(first, second);
    let commit = read_commit(&repo, &second);
    assert_eq!(commit.parent, Some(first.clone()));

    // The parent line is the literal digest of the first commit
    let (_, payload) = repo.store().get(&second).unwrap();
    let text = String::from_utf8(payload).unwrap();
    assert!(text.contains(&format!("parent {}\n", first)));
}

#[test]
fn commit_rejects_empty_message_and_empty_index() {
    let (dir, repo) = init_repo();

    assert!(matches!(
        repo.commit("   "),
        Err(demogit::GitError::EmptyMessage)
    ));
    assert!(matches!(
        repo.commit("msg"),
        Err(demogit::GitError::NothingToCommit)
    ));

    dir.child("a.txt").write_str("hello").unwrap();
    repo.add(ADD_ALL).unwrap();
    assert!(repo.commit("msg").is_ok());
}

#[test]
fn unstage_all_then_status_reports_zero_staged() {
    let (dir, repo) = init_repo();
    dir.child("a.txt").write_str("hello").unwrap();
    repo.add(ADD_ALL).unwrap();
    assert_eq!(repo.status().unwrap().staged.len(), 1);

    repo.unstage_all().unwrap();
    let report = repo.status().unwrap();
    assert!(report.staged.is_empty());
    assert_eq!(report.untracked, ["a.txt"]);

    // Unstaging an already-empty index is a no-op, not an error
    repo.unstage_all().unwrap();
}

#[test]
fn ignore_rules_filter_staging_and_status() {
    let (dir, repo) = init_repo();
    dir.child(IGNORE_FILE).write_str("# build artifacts\nscratch\n").unwrap();
    dir.child("kept.txt").write_str("kept").unwrap();
    dir.child("scratch/junk.bin").write_str("junk").unwrap();
    dir.child(".hidden").write_str("hidden").unwrap();

    assert_eq!(repo.add(ADD_ALL).unwrap(), 1);

    let report = repo.status().unwrap();
    assert_eq!(report.staged, ["kept.txt"]);
    assert!(report.untracked.is_empty());
}

#[test]
fn stored_blob_reads_back_verbatim() {
    let (_dir, repo) = init_repo();
    let content = b"some\x00binary\xffcontent";
    let id = repo.store().put(ObjectType::Blob, content).unwrap();

    let (kind, payload) = repo.store().get(&id).unwrap();
    assert_eq!(kind.as_str(), "blob");
    assert_eq!(payload.len(), content.len());
    assert_eq!(payload, content);
}

#[test]
fn export_head_enumerates_reachable_blobs() {
    let (dir, repo) = init_repo();
    assert!(repo.export_head().unwrap().is_empty());

    dir.child("a.txt").write_str("alpha").unwrap();
    dir.child("docs/b.txt").write_str("beta").unwrap();
    repo.add(ADD_ALL).unwrap();
    repo.commit("snapshot").unwrap();

    let mut entries = repo.export_head().unwrap();
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].path, "a.txt");
    assert_eq!(entries[0].bytes, b"alpha");
    assert_eq!(entries[1].path, "docs/b.txt");
    assert_eq!(entries[1].bytes, b"beta");
    assert_eq!(
        entries[0].id,
        ObjectId::compute(ObjectType::Blob, b"alpha")
    );
}

#[test]
fn materialized_files_round_trip_through_commit() {
    let (dir, repo) = init_repo();
    repo.materialize("fetched/data.txt", b"from remote").unwrap();
    dir.child("fetched/data.txt").assert("from remote");

    let (id, _) = repo.commit("imported").unwrap();
    let commit = read_commit(&repo, &id);
    let (_, payload) = repo.store().get(&commit.tree).unwrap();
    let tree = demogit::core::Tree::parse(&payload).unwrap();
    assert_eq!(tree.entries()[0].name, "fetched/data.txt");
}
