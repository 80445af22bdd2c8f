//! Line-oriented interactive menu, used when no subcommand is given.
//!
//! The menu reads from any `BufRead` and writes to any `Write`, so it can be
//! driven from a terminal or from a test. End of input always ends the menu
//! cleanly. A failed operation is reported and the menu keeps running.

use crate::config::Config;
use crate::store::error::ModeStoreError;
use crate::store::ModeStore;
use crate::ui::print_mode_list;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
==================================================
Cursor custom modes
==================================================
1. Show all modes
2. Show custom modes only
3. Export a mode
4. Import a mode
5. Delete a custom mode
6. Create a mode template
0. Exit
";

/// Runs the menu until the user exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    store: &ModeStore,
    config: &Config,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    loop {
        writeln!(out)?;
        write!(out, "{}", MENU)?;
        writeln!(out)?;

        let Some(choice) = prompt(&mut input, &mut out, "Choose an action: ")? else {
            writeln!(out)?;
            writeln!(out, "No more input, exiting.")?;
            break;
        };

        let handled = match choice.as_str() {
            "1" => show_list(store, &mut out, true)?,
            "2" => show_list(store, &mut out, false)?,
            "3" => export(store, config, &mut input, &mut out)?,
            "4" => import(store, &mut input, &mut out)?,
            "5" => delete(store, &mut input, &mut out)?,
            "6" => template(config, &mut input, &mut out)?,
            "0" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            _ => {
                writeln!(out, "Invalid choice, try again.")?;
                true
            }
        };

        if !handled {
            writeln!(out)?;
            writeln!(out, "Operation cancelled.")?;
            break;
        }

        if prompt(&mut input, &mut out, "\nPress Enter to continue...")?.is_none() {
            writeln!(out)?;
            break;
        }
    }

    Ok(())
}

/// Prints `text` and reads one trimmed line, or `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn report_error<W: Write>(out: &mut W, error: &ModeStoreError) -> io::Result<()> {
    writeln!(out, "Error: {}", error)
}

// Each action returns Ok(false) when input ended mid-prompt.

fn show_list<W: Write>(store: &ModeStore, out: &mut W, include_builtin: bool) -> io::Result<bool> {
    match store.list(include_builtin) {
        Ok(modes) => print_mode_list(out, &modes)?,
        Err(e) => report_error(out, &e)?,
    }
    Ok(true)
}

fn export<R: BufRead, W: Write>(
    store: &ModeStore,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    let Some(id) = prompt(input, out, "Mode id to export: ")? else {
        return Ok(false);
    };
    let Some(file) = prompt(
        input,
        out,
        &format!("Output file [{}]: ", config.export_file),
    )?
    else {
        return Ok(false);
    };
    let file = if file.is_empty() {
        config.export_file.clone()
    } else {
        file
    };

    match store.export(&id, &file) {
        Ok(mode) => writeln!(out, "Mode '{}' exported to {}", mode.display_name(), file)?,
        Err(e) => report_error(out, &e)?,
    }
    Ok(true)
}

fn import<R: BufRead, W: Write>(store: &ModeStore, input: &mut R, out: &mut W) -> io::Result<bool> {
    let Some(file) = prompt(input, out, "Path to mode JSON file: ")? else {
        return Ok(false);
    };
    let Some(id) = prompt(input, out, "New id (leave empty to keep or generate one): ")? else {
        return Ok(false);
    };
    let override_id = (!id.is_empty()).then_some(id.as_str());

    match store.import(&file, override_id) {
        Ok(imported) => writeln!(
            out,
            "Mode '{}' {} with id {}",
            imported.mode.display_name(),
            imported.outcome,
            imported.mode.id
        )?,
        Err(e) => report_error(out, &e)?,
    }
    Ok(true)
}

fn delete<R: BufRead, W: Write>(store: &ModeStore, input: &mut R, out: &mut W) -> io::Result<bool> {
    let Some(id) = prompt(input, out, "Mode id to delete: ")? else {
        return Ok(false);
    };
    let Some(confirm) = prompt(
        input,
        out,
        &format!("Really delete mode '{}'? (yes/no): ", id),
    )?
    else {
        return Ok(false);
    };

    if !confirm.eq_ignore_ascii_case("yes") {
        writeln!(out, "Nothing deleted.")?;
        return Ok(true);
    }

    match store.delete(&id) {
        Ok(()) => writeln!(out, "Mode '{}' deleted", id)?,
        Err(e) => report_error(out, &e)?,
    }
    Ok(true)
}

fn template<R: BufRead, W: Write>(config: &Config, input: &mut R, out: &mut W) -> io::Result<bool> {
    let Some(file) = prompt(
        input,
        out,
        &format!("Template file [{}]: ", config.template_file),
    )?
    else {
        return Ok(false);
    };
    let file = if file.is_empty() {
        config.template_file.clone()
    } else {
        file
    };

    match ModeStore::create_template(&file) {
        Ok(_) => {
            writeln!(out, "Template written to {}", file)?;
            for hint in crate::document::template::template_hints() {
                writeln!(out, "{}", hint)?;
            }
        }
        Err(e) => report_error(out, &e)?,
    }
    Ok(true)
}
