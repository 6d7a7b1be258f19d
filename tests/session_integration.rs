use assert_cmd::Command;
use predicates::prelude::*;

fn ablog(seed: usize, archive: usize) -> Command {
    let mut cmd = Command::cargo_bin("ablog").unwrap();
    cmd.args([
        "--seed",
        &seed.to_string(),
        "--archive-size",
        &archive.to_string(),
    ]);
    cmd
}

#[test]
fn seeded_session_reports_the_initial_count() {
    ablog(3, 4)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Atomic Blog"))
        .stdout(predicate::str::contains("3 atomic posts found"))
        .stdout(predicate::str::contains("by The Atomic Blog"));
}

#[test]
fn published_posts_show_up_in_the_list() {
    ablog(0, 4)
        .write_stdin("add Hot Syntax -- Deploy bandwidth\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Post published: Hot Syntax"))
        .stdout(predicate::str::contains("1 atomic posts found"))
        .stdout(predicate::str::contains("Hot Syntax"))
        .stdout(predicate::str::contains("Deploy bandwidth"));
}

#[test]
fn incomplete_form_submission_is_silently_ignored() {
    ablog(0, 4)
        .write_stdin("add OnlyTitle\nadd Titled -- \nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 atomic posts found"))
        .stdout(predicate::str::contains("Post published").not());
}

#[test]
fn search_filters_the_feed_and_the_counter() {
    ablog(0, 4)
        .write_stdin(
            "add Hot Syntax -- Deploy bandwidth\n\
             add Virtual Driver -- Parse matrix\n\
             search matrix\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("2 atomic posts found"))
        .stdout(predicate::str::contains("1 atomic posts found"))
        .stdout(predicate::str::contains("Virtual Driver"));
}

#[test]
fn archive_toggles_and_promotes() {
    ablog(0, 4)
        .write_stdin("archive\npromote 2\narchive\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 4 archived posts."))
        .stdout(predicate::str::contains("Archived post added as new post:"))
        .stdout(predicate::str::contains("Archive hidden."))
        .stdout(predicate::str::contains("1 atomic posts found"));
}

#[test]
fn promoting_a_bad_index_keeps_the_session_alive() {
    ablog(0, 2)
        .write_stdin("promote 99\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("archive entry not found: 99"))
        .stdout(predicate::str::contains("by The Atomic Blog"));
}

#[test]
fn clear_empties_the_feed_and_repeats_safely() {
    ablog(2, 4)
        .write_stdin("clear\nclear\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All posts cleared."))
        .stdout(predicate::str::contains("0 atomic posts found"));
}

#[test]
fn dark_mode_toggle_is_cosmetic() {
    ablog(1, 2)
        .write_stdin("dark\nlist\ndark\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("fake dark mode on"))
        .stdout(predicate::str::contains("fake dark mode off"))
        .stdout(predicate::str::contains("1 atomic posts found"));
}

#[test]
fn config_set_persists_into_the_project_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    ablog(0, 2)
        .current_dir(temp_dir.path())
        .write_stdin("config seed-posts 7\nconfig\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed-posts = 7"))
        .stdout(predicate::str::contains("takes effect next session"));
    assert!(temp_dir.path().join(".ablog/config.json").exists());
}
