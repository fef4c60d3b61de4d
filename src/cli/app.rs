use std::io::{self, BufRead, Write};

use log::debug;

use super::{render, CommandError};
use crate::network::{Directory, DirectoryError};
use crate::user::PostId;

enum Session {
    LoggedOut,
    LoggedIn(String),
}

/// Interactive console front-end. Owns the directory and the current
/// session; reads commands line by line and dispatches them.
pub struct App<R, W> {
    directory: Directory,
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(directory: Directory, input: R, output: W) -> App<R, W> {
        App {
            directory,
            session: Session::LoggedOut,
            input,
            output,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Consumes the app, handing back the directory it drove.
    pub fn into_directory(self) -> Directory {
        self.directory
    }

    /// Runs the menu loop until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match &self.session {
                Session::LoggedOut => {
                    self.show_login_menu()?;
                    let line = match self.read_line()? {
                        Some(line) => line,
                        None => break,
                    };
                    let username = line.trim();
                    if username.eq_ignore_ascii_case("exit") {
                        writeln!(self.output, "Goodbye!")?;
                        break;
                    }
                    self.login(username)?;
                }
                Session::LoggedIn(username) => {
                    let username = username.clone();
                    self.show_main_menu(&username)?;
                    let line = match self.read_line()? {
                        Some(line) => line,
                        None => break,
                    };
                    let command = line.trim();
                    if command.eq_ignore_ascii_case("logout") {
                        self.session = Session::LoggedOut;
                        writeln!(self.output, "You have been logged out.")?;
                        continue;
                    }
                    if command.eq_ignore_ascii_case("exit") {
                        writeln!(
                            self.output,
                            "Thank you for using the Social Network. Goodbye!"
                        )?;
                        break;
                    }
                    if let Err(err) = self.handle_command(&username, command) {
                        match err {
                            CommandError::Io(e) => return Err(e),
                            other => writeln!(self.output, "!> Error: {}.", other)?,
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        while buffer.ends_with('\n') || buffer.ends_with('\r') {
            buffer.pop();
        }
        Ok(Some(buffer))
    }

    fn show_login_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n===== LOGIN =====")?;
        writeln!(
            self.output,
            "Available users: {}",
            self.directory.usernames().join(", ")
        )?;
        write!(self.output, "Enter username to log in (or 'exit'): ")?;
        self.output.flush()
    }

    fn login(&mut self, username: &str) -> io::Result<()> {
        match self.directory.user(username) {
            Some(user) => {
                let name = user.username.clone();
                writeln!(self.output, "\nWelcome, {}!", name)?;
                self.session = Session::LoggedIn(name);
            }
            None => {
                writeln!(self.output, "!> User not found. Please try again.")?;
            }
        }
        Ok(())
    }

    fn show_main_menu(&mut self, username: &str) -> io::Result<()> {
        writeln!(
            self.output,
            "\n===== Main Menu (Logged in as: {}) =====",
            username
        )?;
        writeln!(self.output, "1. View My News Feed")?;
        writeln!(self.output, "2. View My Profile")?;
        writeln!(self.output, "3. View Someone Else's Profile")?;
        writeln!(self.output, "4. Create a Post")?;
        writeln!(self.output, "5. Add a Friend")?;
        writeln!(self.output, "6. Like a Post")?;
        writeln!(self.output, "logout - Log out and return to login screen")?;
        writeln!(self.output, "exit - Exit the application")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    fn handle_command(&mut self, username: &str, choice: &str) -> Result<(), CommandError> {
        debug!("dispatching command {:?} for {}", choice, username);
        match choice {
            "1" => self.view_news_feed(username),
            "2" => self.view_profile(username),
            "3" => self.view_other_profile(),
            "4" => self.create_post(username),
            "5" => self.add_friend(username),
            "6" => self.like_post(username),
            _ => Err(CommandError::InvalidMenuChoice),
        }
    }

    fn view_news_feed(&mut self, username: &str) -> Result<(), CommandError> {
        writeln!(self.output, "\n===== Your News Feed =====")?;
        let feed = self.directory.news_feed(username)?;
        if feed.is_empty() {
            writeln!(
                self.output,
                "Your feed is empty. Add friends or create a post!"
            )?;
        } else {
            for post in feed {
                writeln!(self.output, "{}", render::render_post(post))?;
            }
        }
        Ok(())
    }

    fn view_profile(&mut self, username: &str) -> Result<(), CommandError> {
        let user = self
            .directory
            .user(username)
            .ok_or_else(|| DirectoryError::UnknownUser(username.to_string()))?;
        let mut posts = self.directory.posts_of(user);
        posts.reverse(); // newest first
        let text = render::render_profile(user, &posts);
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn view_other_profile(&mut self) -> Result<(), CommandError> {
        write!(self.output, "Enter username to view their profile: ")?;
        self.output.flush()?;
        let line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(()),
        };
        self.view_profile(line.trim())
    }

    fn create_post(&mut self, username: &str) -> Result<(), CommandError> {
        writeln!(
            self.output,
            "What's on your mind? (Enter your post content below)"
        )?;
        let content = match self.read_line()? {
            Some(line) => line,
            None => return Ok(()),
        };
        self.directory.create_post(username, &content)?;
        writeln!(self.output, "*> Post created successfully!")?;
        Ok(())
    }

    fn add_friend(&mut self, username: &str) -> Result<(), CommandError> {
        writeln!(
            self.output,
            "Available users: {}",
            self.directory.usernames().join(", ")
        )?;
        write!(self.output, "Enter username to add as a friend: ")?;
        self.output.flush()?;
        let line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(()),
        };
        let friend = line.trim();
        self.directory.add_friend(username, friend)?;
        writeln!(self.output, "*> {} and {} are now friends!", username, friend)?;
        Ok(())
    }

    fn like_post(&mut self, username: &str) -> Result<(), CommandError> {
        writeln!(self.output, "--- Like a Post ---")?;
        writeln!(self.output, "Here are the recent posts from your feed:")?;
        self.view_news_feed(username)?;
        write!(self.output, "\nEnter the ID of the post you want to like: ")?;
        self.output.flush()?;
        let line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(()),
        };
        let id = PostId::from(line.trim());

        // Only posts visible in the caller's own feed can be liked.
        let in_feed = self
            .directory
            .news_feed(username)?
            .iter()
            .any(|post| post.id == id);
        if !in_feed {
            return Err(CommandError::PostNotInFeed);
        }

        let author = self.directory.like_post(&id)?.author.clone();
        writeln!(self.output, "*> You liked {}'s post!", author)?;
        Ok(())
    }
}

/// Demo state for the interactive session: four users, two friendships,
/// four posts and a few comments.
pub fn seed_demo(directory: &mut Directory) -> Result<(), DirectoryError> {
    directory.create_user("alice")?;
    directory.create_user("bob")?;
    directory.create_user("charlie")?;
    directory.create_user("diana")?;

    directory.set_profile_info("alice", "Software developer and cat lover.")?;
    directory.set_profile_info("bob", "Musician and coffee enthusiast.")?;

    directory.add_friend("alice", "bob")?;
    directory.add_friend("alice", "charlie")?;

    let p1 = directory.create_post(
        "alice",
        "Just finished a great new feature for my project! #coding",
    )?;
    let p2 = directory.create_post("bob", "My new song is out now! Check it out on SoundWave.")?;
    directory.create_post("charlie", "Thinking about learning Rust. Any tips?")?;
    directory.create_post("alice", "My cat is being extra cute today.")?;

    directory.add_comment(&p1, "bob", "Awesome! Can't wait to see it.")?;
    directory.add_comment(&p2, "alice", "Listening now! It's fantastic!")?;
    directory.add_comment(&p2, "charlie", "Great track, Bob!")?;
    Ok(())
}
