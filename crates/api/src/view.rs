//! Rendering of lookup progress and results.

use chrono::Utc;
use hubcard_domain::ProfileRecord;

/// Sink for lookup progress updates.
///
/// `render` is called once per progress event; the terminal event always
/// carries progress 100 and the completed record.
pub trait ProfileView: Send + Sync {
    fn render(&self, record: &ProfileRecord, progress: u8, next: Option<u8>);
}

/// Renders lookups to stdout.
pub struct TerminalView {
    quiet: bool,
}

impl TerminalView {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn render_card(&self, record: &ProfileRecord) {
        if record.error {
            println!(
                "error: {}",
                record.message.as_deref().unwrap_or("lookup failed")
            );
            return;
        }

        println!("{}", record.login);
        if let Some(name) = record.name.as_deref().filter(|n| !n.is_empty()) {
            println!("  name:      {name}");
        }
        if let Some(email) = record.email.as_deref() {
            println!("  email:     {email}");
        }
        if let Some(followers) = record.follower_count {
            println!("  followers: {followers}");
        }
        if let Some(url) = record.url.as_deref() {
            println!("  url:       {url}");
        }
        if record.served_from_cache {
            if let Some(days) = record.cache_age_days_at(Utc::now().timestamp()) {
                println!("  (cached, last updated {days} day(s) ago)");
            } else {
                println!("  (cached)");
            }
        }

        if record.repositories.is_empty() {
            println!("  no public repositories");
        } else {
            println!("  repositories:");
            for repo in &record.repositories {
                match repo.description.as_deref() {
                    Some(description) => {
                        println!("    {} - {} ({})", repo.name, description, repo.url)
                    }
                    None => println!("    {} ({})", repo.name, repo.url),
                }
            }
        }
    }
}

impl ProfileView for TerminalView {
    fn render(&self, record: &ProfileRecord, progress: u8, next: Option<u8>) {
        if progress < 100 {
            if !self.quiet {
                match next {
                    Some(next) => println!("[{progress:>3}%] working towards {next}%..."),
                    None => println!("[{progress:>3}%] ..."),
                }
            }
            return;
        }

        self.render_card(record);
    }
}
