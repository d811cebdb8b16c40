//! Terminal front end for the member registry.
//!
//! # Responsibility
//! - Render the member list and forward user commands to the controller.
//! - Print every controller notification as it arrives.
//!
//! Commands are read line by line from stdin; row numbers are 1-based.

use socios_core::{
    init_logging, FormSurface, LoggingConfig, MemberController, MemberField, MemberForm,
    MemberId, MemberRow, Notification, Notifier,
};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  set <field> <value>   fields: name surname member_number national_id phone sex
  clear                 reset the form
  submit                create a member from the form
  edit <n>              load row n into the form
  commit <n>            save the form into row n
  delete <n>            remove row n
  list                  show members and form
  help | quit";

/// Prints notifications the way a snackbar would show them.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: &Notification) {
        println!("[{}] {}", notification.dismiss_label, notification.message);
    }
}

type Controller = MemberController<MemberForm, ConsoleNotifier>;

fn main() {
    if let Some(config) = LoggingConfig::from_env() {
        if let Err(err) = init_logging(&config) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("socios {}", socios_core::core_version());
    println!("{HELP}");

    let mut controller = Controller::new(MemberForm::new(), ConsoleNotifier);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("failed to read input: {err}");
                break;
            }
        }

        match run_command(&mut controller, line.trim_end_matches(['\n', '\r'])) {
            Ok(true) => {}
            Ok(false) => break,
            Err(message) => println!("{message}"),
        }
    }
}

/// Executes one input line. Returns `Ok(false)` when the session should end.
fn run_command(controller: &mut Controller, line: &str) -> Result<bool, String> {
    let trimmed = line.trim_start();
    let (command, rest) = trimmed
        .split_once(' ')
        .unwrap_or((trimmed.trim_end(), ""));

    match command {
        "" => {}
        "help" => println!("{HELP}"),
        "quit" | "exit" => return Ok(false),
        "list" => print_state(controller),
        "clear" => controller.form_mut().reset(),
        "set" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            let field =
                MemberField::parse(field).ok_or_else(|| format!("unknown field `{field}`"))?;
            controller
                .form_mut()
                .set_text(field, value)
                .map_err(|err| err.to_string())?;
        }
        "submit" => {
            // outcome already reported through the notifier
            let _ = controller.submit();
        }
        "edit" => {
            let id = row_id(controller, rest)?;
            controller.begin_edit(id).map_err(|err| err.to_string())?;
            print_form(controller);
        }
        "commit" => {
            let id = row_id(controller, rest)?;
            let _ = controller.commit_edit(id);
        }
        "delete" => {
            let id = row_id(controller, rest)?;
            let _ = controller.delete(id);
        }
        other => return Err(format!("unknown command `{other}`; type `help`")),
    }
    Ok(true)
}

fn row_id(controller: &Controller, raw: &str) -> Result<MemberId, String> {
    let row = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("expected a row number, got `{}`", raw.trim()))?;
    row.checked_sub(1)
        .and_then(|index| controller.store().at(index))
        .map(|member| member.id)
        .ok_or_else(|| format!("no member at row {row}"))
}

fn print_state(controller: &Controller) {
    let rows = controller.rows();
    if rows.is_empty() {
        println!("(no members)");
    }
    for (index, row) in rows.iter().enumerate() {
        println!("{}", format_row(index + 1, row));
    }
    print_form(controller);
}

fn print_form(controller: &Controller) {
    let draft = controller.form().values();
    let mode = match controller.edit_target() {
        Some(_) => "editing",
        None => "creating",
    };
    println!(
        "form ({mode}): name={:?} surname={:?} member_number={} national_id={:?} phone={:?} sex={}",
        draft.name,
        draft.surname,
        draft
            .member_number
            .map(|n| n.to_string())
            .unwrap_or_default(),
        draft.national_id,
        draft.phone,
        draft.sex.map(|s| s.code()).unwrap_or_default(),
    );
}

fn format_row(number: usize, row: &MemberRow) -> String {
    let marker = if row.editing { '*' } else { ' ' };
    let values = &row.values;
    format!(
        "{marker}{number:>3}. #{} {} {} | {} | {} | {}",
        values
            .member_number
            .map(|n| n.to_string())
            .unwrap_or_default(),
        values.name,
        values.surname,
        values.national_id,
        values.phone,
        values.sex.map(|s| s.code()).unwrap_or_default(),
    )
}
