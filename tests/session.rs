use std::io::Cursor;

use plaza::cli::{seed_demo, App};
use plaza::network::Directory;

fn seeded() -> Directory {
    let mut directory = Directory::new();
    seed_demo(&mut directory).unwrap();
    directory
}

fn run_session(directory: Directory, script: &str) -> (String, Directory) {
    let mut out: Vec<u8> = Vec::new();
    let mut app = App::new(directory, Cursor::new(script.to_string().into_bytes()), &mut out);
    app.run().unwrap();
    let directory = app.into_directory();
    let output = String::from_utf8(out).unwrap();
    (output, directory)
}

#[test]
fn login_feed_and_exit() {
    let (output, _) = run_session(seeded(), "alice\n1\nexit\n");

    assert!(output.contains("===== LOGIN ====="));
    assert!(output.contains("Available users: alice, bob, charlie, diana"));
    assert!(output.contains("Welcome, alice!"));
    assert!(output.contains("===== Your News Feed ====="));
    // own posts plus friends' posts
    assert!(output.contains("My cat is being extra cute today."));
    assert!(output.contains("My new song is out now! Check it out on SoundWave."));
    assert!(output.contains("Thinking about learning Rust. Any tips?"));
    assert!(output.contains("Thank you for using the Social Network. Goodbye!"));
}

#[test]
fn feed_is_newest_first_in_output() {
    let (output, _) = run_session(seeded(), "alice\n1\nexit\n");
    let cat = output.find("My cat is being extra cute today.").unwrap();
    let feature = output
        .find("Just finished a great new feature for my project!")
        .unwrap();
    assert!(cat < feature, "newest post must be printed first");
}

#[test]
fn unknown_login_reprompts() {
    let (output, _) = run_session(seeded(), "mallory\nexit\n");
    assert!(output.contains("!> User not found. Please try again."));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn empty_feed_message_for_friendless_user() {
    let (output, _) = run_session(seeded(), "diana\n1\nexit\n");
    assert!(output.contains("Your feed is empty. Add friends or create a post!"));
}

#[test]
fn invalid_menu_choice_keeps_session() {
    let (output, _) = run_session(seeded(), "alice\n9\n2\nexit\n");
    assert!(output.contains("!> Error: Invalid choice. Please try again."));
    // still logged in afterwards
    assert!(output.contains("          User Profile: alice"));
}

#[test]
fn logout_returns_to_login_screen() {
    let (output, _) = run_session(seeded(), "alice\nlogout\nbob\n2\nexit\n");
    assert!(output.contains("You have been logged out."));
    assert!(output.contains("Welcome, bob!"));
    assert!(output.contains("          User Profile: bob"));
    assert!(output.contains("Info: Musician and coffee enthusiast."));
}

#[test]
fn view_other_profile_by_name() {
    let (output, _) = run_session(seeded(), "alice\n3\nbob\n3\nghost\nexit\n");
    assert!(output.contains("          User Profile: bob"));
    assert!(output.contains("!> Error: User 'ghost' not found."));
}

#[test]
fn create_post_and_add_friend() {
    let (output, directory) = run_session(
        seeded(),
        "diana\n4\nHello from diana!\n5\nbob\n1\nexit\n",
    );
    assert!(output.contains("*> Post created successfully!"));
    assert!(output.contains("*> diana and bob are now friends!"));
    // the new friendship puts bob's post in diana's feed
    assert!(output.contains("My new song is out now!"));
    assert!(output.contains("Hello from diana!"));

    let diana = directory.user("diana").unwrap();
    assert_eq!(diana.friends, vec!["bob".to_string()]);
    assert_eq!(diana.posts.len(), 1);
    let bob = directory.user("bob").unwrap();
    assert!(bob.friends.contains(&"diana".to_string()));
}

#[test]
fn self_friend_request_is_reported() {
    let (output, directory) = run_session(seeded(), "diana\n5\ndiana\nexit\n");
    assert!(output.contains("!> Error: You cannot add yourself as a friend."));
    assert!(directory.user("diana").unwrap().friends.is_empty());
}

#[test]
fn liking_a_friends_post_from_the_feed() {
    let mut directory = Directory::new();
    directory.create_user("alice").unwrap();
    directory.create_user("bob").unwrap();
    directory.add_friend("alice", "bob").unwrap();
    let post = directory.create_post("bob", "hi").unwrap();

    let script = format!("alice\n6\n{}\nexit\n", post);
    let (output, directory) = run_session(directory, &script);

    assert!(output.contains("--- Like a Post ---"));
    assert!(output.contains("*> You liked bob's post!"));
    assert_eq!(directory.post(&post).unwrap().likes, 1);
}

#[test]
fn liking_outside_the_feed_is_rejected() {
    let mut directory = Directory::new();
    directory.create_user("alice").unwrap();
    directory.create_user("charlie").unwrap();
    // no friendship, so charlie's post is not in alice's feed
    let post = directory.create_post("charlie", "private-ish").unwrap();

    let script = format!("alice\n6\n{}\nexit\n", post);
    let (output, directory) = run_session(directory, &script);

    assert!(output.contains("!> Error: That post ID is not in your feed or does not exist."));
    assert_eq!(directory.post(&post).unwrap().likes, 0);
}

#[test]
fn end_of_input_terminates_cleanly() {
    let (output, _) = run_session(seeded(), "alice\n");
    assert!(output.contains("Welcome, alice!"));
    // no exit command, the session just ends with the input
    assert!(!output.contains("Thank you for using the Social Network."));
}
