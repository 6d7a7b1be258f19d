use ablog::commands::{CmdMessage, DisplayPost, MessageLevel};
use chrono::{DateTime, Utc};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::styles::Theme;

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Feed listing: title line with a right-aligned age column, body below.
pub(crate) fn print_posts(posts: &[DisplayPost], theme: &Theme) {
    if posts.is_empty() {
        println!("No posts to show.");
        return;
    }

    for dp in posts {
        let idx_str = format!("{:>3}. ", dp.index);
        let idx_width = idx_str.width();
        let time_ago = format_time_ago(dp.post.created_at);

        let available = LINE_WIDTH.saturating_sub(idx_width + TIME_WIDTH);
        let title_display = truncate_to_width(&dp.post.title, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{}{}",
            theme.index.apply_to(&idx_str),
            theme.title.apply_to(&title_display),
            " ".repeat(padding),
            theme.time.apply_to(&time_ago)
        );
        println!(
            "{}{}",
            " ".repeat(idx_width),
            theme.body.apply_to(&dp.post.body)
        );
    }
}

/// Archive listing: one compact "title: body" line per entry. The batch can
/// run to five digits, so the index column is wider here.
pub(crate) fn print_archive(posts: &[DisplayPost], theme: &Theme) {
    for dp in posts {
        let idx_str = format!("{:>6}. ", dp.index);
        let line = format!("{}: {}", dp.post.title, dp.post.body);
        let truncated = truncate_to_width(&line, LINE_WIDTH.saturating_sub(idx_str.width()));
        println!(
            "{}{}",
            theme.index.apply_to(&idx_str),
            theme.body.apply_to(&truncated)
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = timeago::Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
