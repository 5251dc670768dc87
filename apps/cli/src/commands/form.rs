//! # Form Command
//!
//! A line-based rendition of the calculator window. Each input line is one
//! UI event; the form is redrawn after every event that changes it.
//!
//! ```text
//! Bill amount:    90.00
//! Tip:            [10%]  15%   20%   custom: ____
//! Split bill?     [Yes]  No
//! People:          2    [3]    4     custom: ____
//!
//! Total per person: £33.00
//! > _
//! ```
//!
//! Bad commands print a `!` hint and leave the form as it was.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tipcalc_core::{report, PeoplePreset, SplitChoice, TipPreset};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::state::{AppConfig, FormState};

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  bill <amount>          enter the bill amount
  tip <10|15|20>         select a tip preset
  custom-tip <percent>   type a custom tip (blank clears it)
  split <yes|no>         answer 'Split bill?'
  people <2|3|4>         select a people preset (split only)
  custom-people <n>      type a custom number of people (split only)
  calculate              work out the total
  show                   redraw the form
  reset                  clear every field
  help                   show this list
  quit                   leave";

// =============================================================================
// Commands
// =============================================================================

/// One parsed line of form input.
#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    Bill(String),
    Tip(TipPreset),
    CustomTip(String),
    Split(bool),
    People(PeoplePreset),
    CustomPeople(String),
    Calculate,
    Show,
    Reset,
    Help,
    Quit,
}

impl FromStr for FormCommand {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "bill" => FormCommand::Bill(rest.to_string()),
            "tip" => FormCommand::Tip(parse_arg(rest)?),
            "custom-tip" => FormCommand::CustomTip(rest.to_string()),
            "split" => {
                let choice: SplitChoice = parse_arg(rest)?;
                // FromStr never yields Undecided
                FormCommand::Split(choice == SplitChoice::Split)
            }
            "people" => FormCommand::People(parse_arg(rest)?),
            "custom-people" => FormCommand::CustomPeople(rest.to_string()),
            "calculate" | "calc" => FormCommand::Calculate,
            "show" => FormCommand::Show,
            "reset" => FormCommand::Reset,
            "help" | "?" => FormCommand::Help,
            "quit" | "exit" | "q" => FormCommand::Quit,
            _ => return Err(AppError::UnknownCommand(word.to_string())),
        };

        Ok(command)
    }
}

fn parse_arg<T>(arg: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    arg.parse()
        .map_err(|e: T::Err| AppError::InvalidArgument(e.to_string()))
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// =============================================================================
// Session
// =============================================================================

/// Applies one command to the form, writing whatever it displays.
pub fn apply<W: Write>(
    form: &mut FormState,
    command: FormCommand,
    config: &AppConfig,
    out: &mut W,
) -> AppResult<Flow> {
    let symbol = config.currency_symbol();

    match command {
        FormCommand::Bill(text) => form.set_bill(text),
        FormCommand::Tip(preset) => form.select_tip_preset(preset),
        FormCommand::CustomTip(text) => form.enter_custom_tip(text),
        FormCommand::Split(split) => form.choose_split(split),
        FormCommand::People(preset) => form.select_people_preset(preset)?,
        FormCommand::CustomPeople(text) => form.enter_custom_people(text)?,
        FormCommand::Calculate => {
            writeln!(out, "{}", form.calculate(symbol))?;
            if config.show_breakdown() {
                if let Some(breakdown) = form.last_breakdown() {
                    for line in report::breakdown_lines(breakdown, symbol) {
                        writeln!(out, "{}", line)?;
                    }
                }
            }
            return Ok(Flow::Continue);
        }
        FormCommand::Show => {}
        FormCommand::Reset => form.reset(symbol),
        FormCommand::Help => {
            writeln!(out, "{}", HELP)?;
            return Ok(Flow::Continue);
        }
        FormCommand::Quit => return Ok(Flow::Quit),
    }

    write!(out, "{}", render_form(form))?;
    Ok(Flow::Continue)
}

/// Reads commands from `input` until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &AppConfig,
) -> AppResult<()> {
    let mut form = FormState::new(config.currency_symbol());
    info!("Form session started");

    writeln!(out, "Tip Calculator. Type 'help' for commands.")?;
    write!(out, "{}", render_form(&form))?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
            continue;
        }

        let flow = match line.parse::<FormCommand>() {
            Ok(command) => {
                debug!(?command, "Form command");
                apply(&mut form, command, config, out)
            }
            Err(err) => Err(err),
        };

        match flow {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            // I/O failures end the session; everything else is a hint
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(err) => writeln!(out, "! {}", err)?,
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    info!("Form session ended");
    Ok(())
}

// =============================================================================
// Rendering
// =============================================================================

/// Draws the form as text. Highlighted options are bracketed.
pub fn render_form(form: &FormState) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Bill amount:    {}", form.bill_text()));

    let tips: Vec<String> = TipPreset::ALL
        .iter()
        .map(|p| option_cell(&p.to_string(), form.highlighted_tip() == Some(*p)))
        .collect();
    lines.push(format!(
        "Tip:            {}  custom: {}",
        tips.join(" "),
        blank_as_underscores(form.custom_tip())
    ));

    let split = form.highlighted_split();
    lines.push(format!(
        "Split bill?     {} {}",
        option_cell("Yes", split == Some(true)),
        option_cell("No", split == Some(false))
    ));

    if form.people_options_visible() {
        let people: Vec<String> = PeoplePreset::ALL
            .iter()
            .map(|p| option_cell(&p.to_string(), form.highlighted_people() == Some(*p)))
            .collect();
        lines.push(format!(
            "People:         {}  custom: {}",
            people.join(" "),
            blank_as_underscores(form.custom_people())
        ));
    }

    lines.push(String::new());
    lines.push(form.result_line().to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn option_cell(label: &str, highlighted: bool) -> String {
    if highlighted {
        format!("[{}]", label)
    } else {
        format!(" {} ", label)
    }
}

fn blank_as_underscores(text: &str) -> &str {
    if text.is_empty() {
        "____"
    } else {
        text
    }
}
