// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the custos CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `CUSTOS_THEME`
//! first (for explicit control), then `COLORFGBG` (set by some terminals),
//! then macOS system appearance, then defaults to dark because most
//! developers live there.
//!
//! Respects `NO_COLOR` for the purists and non-TTY detection for pipelines.
//!
//! # Theme detection order
//!
//! 1. `CUSTOS_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use custos::harness::{CaseReport, Summary};

// Box drawing width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via CUSTOS_THEME
    if let Ok(theme) = std::env::var("CUSTOS_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. macOS: Check system appearance
    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    // 4. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = GRAY();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// One pass/fail line for a finished check case.
///
/// `CheckedCursor<i32> check #2 (indexed access) ✓ passed`
pub fn case_line(case: &CaseReport) -> String {
    let label = format!(
        "CheckedCursor<{}> check #{} ({})",
        case.element, case.number, case.name
    );
    let verdict = if case.passed {
        themed(GREEN, &[BOLD], "✓ passed")
    } else {
        themed(RED, &[BOLD], "✗ FAILED")
    };
    format!("  {:<44} {}", label, verdict)
}

/// Print the aggregate box for a finished run.
pub fn print_summary(summary: &Summary) {
    println!();
    section_top("SUMMARY");
    row(&format!(
        "  {} checks: {} passed, {} failed",
        summary.cases.len(),
        summary.passed,
        summary.failed
    ));
    if summary.all_passed() {
        row(&format!("  {}", themed(GREEN, &[BOLD], "All checks passed")));
    } else {
        row(&format!("  {}", themed(RED, &[BOLD], "Some checks FAILED")));
    }
    section_bot();
}

/// One line describing a check without running it.
pub fn list_line(element: &str, number: u32, name: &str) -> String {
    format!(
        "  {} {}",
        themed(CYAN, &[], &format!("CheckedCursor<{}> #{}", element, number)),
        themed(GRAY, &[DIM], name)
    )
}
