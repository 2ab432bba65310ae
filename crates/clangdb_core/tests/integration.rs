//! Integration tests against a real libclang.
//!
//! Every test loads a fixture store from disk and drives the wrappers
//! end-to-end. Tests skip with a note on hosts without a clang toolchain.

use clangdb_core::{Clang, CompilationDatabase, Error};
use clangdb_testkit::{libclang_available, CommandEntry, FixtureDatabase};

fn two_entry_fixture() -> FixtureDatabase {
    FixtureDatabase::new(&[
        CommandEntry::new("/build", &["cc", "-c", "a.c"], "/build/a.c"),
        CommandEntry::new("/build", &["cc", "-c", "b.c"], "/build/b.c"),
    ])
}

#[test]
fn reports_the_clang_version() {
    if !libclang_available() {
        return;
    }
    let version = Clang::get().unwrap().version();
    assert!(version.to_lowercase().contains("clang"), "{version}");
}

#[test]
fn length_matches_the_store() {
    if !libclang_available() {
        return;
    }
    let fixture = FixtureDatabase::new(&[
        CommandEntry::new("/src", &["clang", "-c", "one.cpp"], "/src/one.cpp"),
        CommandEntry::new("/src", &["clang", "-c", "two.cpp"], "/src/two.cpp"),
        CommandEntry::new("/src", &["clang", "-c", "three.cpp"], "/src/three.cpp"),
    ]);

    let db = CompilationDatabase::from_directory(fixture.path()).unwrap();
    let commands = db.compile_commands().unwrap();
    assert_eq!(commands.len().unwrap(), 3);

    for i in 0..3 {
        let command = commands.get(i).unwrap();
        assert!(!command.directory().is_empty());
    }
}

#[test]
fn out_of_range_indices_are_rejected() {
    if !libclang_available() {
        return;
    }
    let fixture = two_entry_fixture();
    let db = CompilationDatabase::from_directory(fixture.path()).unwrap();
    let commands = db.compile_commands().unwrap();

    for index in [2, 3, u32::MAX] {
        match commands.get(index) {
            Err(Error::IndexOutOfRange { index: i, len }) => {
                assert_eq!(i, index);
                assert_eq!(len, 2);
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }
}

#[test]
fn arguments_keep_their_recorded_order_and_restart() {
    if !libclang_available() {
        return;
    }
    let fixture = FixtureDatabase::new(&[CommandEntry::new(
        "/work",
        &["clang", "-c", "foo.cpp"],
        "/work/foo.cpp",
    )]);

    let db = CompilationDatabase::from_directory(fixture.path()).unwrap();
    let commands = db.compile_commands().unwrap();
    let command = commands.get(0).unwrap();

    let first: Vec<String> = command.arguments().collect();
    let second: Vec<String> = command.arguments().collect();
    assert_eq!(first, ["clang", "-c", "foo.cpp"]);
    assert_eq!(first, second);
}

#[test]
fn argument_indexing_is_bounds_checked() {
    if !libclang_available() {
        return;
    }
    let fixture = two_entry_fixture();
    let db = CompilationDatabase::from_directory(fixture.path()).unwrap();
    let commands = db.compile_commands().unwrap();
    let command = commands.get(0).unwrap();

    assert_eq!(command.argument_count(), 3);
    assert_eq!(command.argument(0).unwrap(), "cc");
    assert!(matches!(
        command.argument(3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));
}

#[test]
fn storeless_directory_fails_to_load() {
    if !libclang_available() {
        return;
    }
    let fixture = FixtureDatabase::empty_directory();
    match CompilationDatabase::from_directory(fixture.path()) {
        Err(Error::CanNotLoadDatabase { path, .. }) => {
            assert_eq!(path, fixture.path());
        }
        other => panic!("expected CanNotLoadDatabase, got {other:?}"),
    }
}

#[test]
fn absent_file_yields_an_empty_collection() {
    if !libclang_available() {
        return;
    }
    let fixture = two_entry_fixture();
    let db = CompilationDatabase::from_directory(fixture.path()).unwrap();

    let commands = db.compile_commands_for_file("/no/such/file.c").unwrap();
    assert_eq!(commands.len().unwrap(), 0);
    assert!(commands.is_empty().unwrap());
}

#[test]
fn matching_file_yields_its_commands() {
    if !libclang_available() {
        return;
    }
    let fixture = two_entry_fixture();
    let db = CompilationDatabase::from_directory(fixture.path()).unwrap();

    let commands = db.compile_commands_for_file("/build/a.c").unwrap();
    assert_eq!(commands.len().unwrap(), 1);
    let args: Vec<String> = commands.get(0).unwrap().arguments().collect();
    assert_eq!(args, ["cc", "-c", "a.c"]);
}

#[test]
fn dispose_is_idempotent_and_fences_later_calls() {
    if !libclang_available() {
        return;
    }
    let fixture = two_entry_fixture();
    let mut db = CompilationDatabase::from_directory(fixture.path()).unwrap();

    db.dispose();
    db.dispose();

    assert!(matches!(
        db.compile_commands(),
        Err(Error::Disposed { resource: "CompilationDatabase" })
    ));
    assert!(matches!(
        db.compile_commands_for_file("/build/a.c"),
        Err(Error::Disposed { .. })
    ));
}

#[test]
fn disposed_commands_fence_later_calls() {
    if !libclang_available() {
        return;
    }
    let fixture = two_entry_fixture();
    let db = CompilationDatabase::from_directory(fixture.path()).unwrap();
    let mut commands = db.compile_commands().unwrap();

    commands.dispose();
    commands.dispose();

    assert!(matches!(
        commands.len(),
        Err(Error::Disposed { resource: "CompileCommands" })
    ));
    assert!(matches!(commands.get(0), Err(Error::Disposed { .. })));
}

#[test]
fn commands_outlive_their_database() {
    if !libclang_available() {
        return;
    }
    let fixture = two_entry_fixture();
    let db = CompilationDatabase::from_directory(fixture.path()).unwrap();
    let commands = db.compile_commands().unwrap();
    drop(db);

    // The collection is an independent native handle.
    assert_eq!(commands.len().unwrap(), 2);
    assert_eq!(commands.get(1).unwrap().directory(), "/build");
}

#[test]
fn iterator_visits_every_command_in_order() {
    if !libclang_available() {
        return;
    }
    let fixture = two_entry_fixture();
    let db = CompilationDatabase::from_directory(fixture.path()).unwrap();
    let commands = db.compile_commands().unwrap();

    let files: Vec<String> = commands
        .iter()
        .unwrap()
        .map(|command| command.arguments().last().unwrap_or_default())
        .collect();
    assert_eq!(files, ["a.c", "b.c"]);
}

#[test]
fn two_entry_store_round_trip() {
    if !libclang_available() {
        return;
    }
    let fixture = two_entry_fixture();
    let db = CompilationDatabase::from_directory(fixture.path()).unwrap();
    let commands = db.compile_commands().unwrap();

    assert_eq!(commands.len().unwrap(), 2);

    let first: Vec<String> = commands.get(0).unwrap().arguments().collect();
    assert_eq!(first, ["cc", "-c", "a.c"]);

    assert_eq!(commands.get(1).unwrap().directory(), "/build");
}
