use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode, Screen};
use super::form::ExpenseForm;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    /// Refused on the login screen.
    pub(crate) requires_login: bool,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $login:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                requires_login: $login,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Fintrack", false, cmd_quit, r);
    register_command!("quit", "Quit Fintrack", false, cmd_quit, r);
    register_command!("h", "Show available commands", false, cmd_help, r);
    register_command!("help", "Show available commands", false, cmd_help, r);
    register_command!("login", "Log in", false, cmd_login, r);
    register_command!("logout", "Log out and discard the session", true, cmd_logout, r);
    register_command!(
        "a",
        "Add expense (e.g. :a 2024-05-01 5 Food Coffee)",
        true,
        cmd_add,
        r
    );
    register_command!(
        "add",
        "Add expense (e.g. :add 2024-05-01 5 Food Coffee)",
        true,
        cmd_add,
        r
    );
    register_command!("e", "Edit expense (e.g. :e 2)", true, cmd_edit, r);
    register_command!("edit", "Edit expense (e.g. :edit 2)", true, cmd_edit, r);
    register_command!("cancel", "Close the open form", true, cmd_cancel, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let (cmd_name, args) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    let args = args.trim();

    match COMMANDS.get(cmd_name) {
        Some(cmd) if cmd.requires_login && app.screen() == Screen::Login => {
            app.set_status(format!(":{cmd_name} needs you to log in first"));
        }
        Some(cmd) => (cmd.run)(args, app)?,
        None => {
            let suggestion = find_closest(cmd_name);
            app.set_status(format!(
                "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
            ));
        }
    }

    Ok(())
}

fn find_closest(input: &str) -> &'static str {
    COMMANDS
        .keys()
        .copied()
        .filter(|k| k.len() > 1)
        .min_by_key(|k| (levenshtein(input, k), *k))
        .unwrap_or("help")
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_login(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.login();
    Ok(())
}

fn cmd_logout(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.logout();
    Ok(())
}

/// With no arguments, open the add form. Otherwise fill it from
/// `<date> <amount> <category> <name...>` and submit.
fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.form.is_some() {
        app.set_status("Finish or cancel the open form first");
        return Ok(());
    }
    if args.is_empty() {
        app.open_add_form();
        return Ok(());
    }

    let Some((date, amount, category, name)) = split_add_args(args) else {
        app.set_status("Usage: :add <YYYY-MM-DD> <amount> <category> <name>");
        return Ok(());
    };

    let mut form = ExpenseForm::add();
    form.date = date.to_string();
    form.amount = amount.to_string();
    form.category = category.to_string();
    form.name = name.to_string();
    app.form = Some(form);
    app.input_mode = InputMode::Form;
    app.submit_form();
    Ok(())
}

/// `<date> <amount> <category> <name...>`, tolerating runs of spaces
/// between fields. The name keeps its inner spacing.
fn split_add_args(args: &str) -> Option<(&str, &str, &str, &str)> {
    let mut rest = args.trim_start();
    let mut head = [""; 3];
    for slot in &mut head {
        let end = rest.find(char::is_whitespace)?;
        *slot = &rest[..end];
        rest = rest[end..].trim_start();
    }
    let name = rest.trim_end();
    if name.is_empty() {
        return None;
    }
    Some((head[0], head[1], head[2], name))
}

fn cmd_edit(args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.form.is_some() {
        app.set_status("Finish or cancel the open form first");
        return Ok(());
    }
    if args.is_empty() {
        app.open_edit_selected();
        return Ok(());
    }
    match args.trim_start_matches('#').parse::<i64>() {
        Ok(id) => app.open_edit(id),
        Err(_) => app.set_status("Usage: :edit <id>"),
    }
    Ok(())
}

fn cmd_cancel(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.form.is_some() {
        app.cancel_form();
    } else {
        app.set_status("No form open");
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
