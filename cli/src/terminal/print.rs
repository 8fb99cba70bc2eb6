use std::fmt::Display;

use colored::*;
use netswitch_common::config::Config;
use netswitch_common::error::OpReport;
use tracing::{error, info};

pub const TOTAL_WIDTH: usize = 64;

/// Events with this target skip the level symbol in the formatter.
pub const RAW_TARGET: &str = "netswitch::print";

pub fn print(msg: &str) {
    info!(target: RAW_TARGET, "{msg}");
}

pub fn banner(cfg: &Config) {
    if cfg.quiet {
        return;
    }

    let text_content: String = format!("⟦ NETSWITCH v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();
    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, cfg: &Config) {
    if cfg.quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );
    print(&line);
}

pub fn status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".bright_black();
    print(&format!("{} {}", prefix, msg.as_ref()));
}

pub fn aligned_line<V: Display>(key: &str, value: V) {
    let dots: String = ".".repeat((10_usize).saturating_sub(key.len()));
    print(&format!(
        "{}{}{} {}",
        key.bright_green(),
        dots.bright_black(),
        ":".bright_black(),
        value
    ));
}

pub fn tree_line(idx: usize, name: &str, last: bool) {
    let branch: ColoredString = if last {
        "└─".bright_black()
    } else {
        "├─".bright_black()
    };
    print(&format!(
        " {} {} {}",
        branch,
        format!("[{idx}]").bright_black(),
        name
    ));
}

/// Renders an operation report at the matching level; the message is
/// already sanitized and escaped by the core.
pub fn report(report: &OpReport) {
    if report.ok {
        info!("{}", report.message);
    } else {
        error!("{}", report.message);
    }
}
