//! Interactive numbered menu over the same logic as the subcommands.

use crate::cli::commands::load_partial;
use crate::cli::commands::summary::print_summary;
use crate::cli::parser::SummaryKind;
use crate::config::Config;
use crate::core::add::{AddLogic, AddRequest};
use crate::core::del::DeleteLogic;
use crate::core::edit::{EditLogic, EditRequest};
use crate::core::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::confirm;
use crate::export::logic::ExportTarget;
use crate::export::{ExportFormat, ExportLogic};
use crate::store::StudyStore;
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::report::records_table;
use crate::utils::date::today;
use crate::utils::duration::{format_hours, parse_hours};
use std::io::{self, BufRead, Write};

const MENU: &str = "\
Please select an option:
  1: Add a new study log
  2: View all study logs
  3: Edit a log
  4: Delete a log
  5: View summary by date
  6: View summary by subject
  7: Export logs to a new CSV file
  8: Exit application";

const PARTIAL_LOAD: &str = "The log file could not be read completely. \
Adding, editing and deleting are disabled so the unread logs are not overwritten.";

pub fn handle(cfg: &Config) -> AppResult<()> {
    let (store, partial) = load_partial(cfg)?;
    let stdin = io::stdin();
    Menu::new(store, cfg, stdin.lock())
        .partial(partial)
        .run()
}

pub struct Menu<'a, R: BufRead> {
    store: StudyStore,
    cfg: &'a Config,
    input: R,
    /// Set when the store holds only part of the file; saving would lose the rest.
    partial: bool,
}

impl<'a, R: BufRead> Menu<'a, R> {
    pub fn new(store: StudyStore, cfg: &'a Config, input: R) -> Self {
        Self {
            store,
            cfg,
            input,
            partial: false,
        }
    }

    pub fn partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    pub fn into_store(self) -> StudyStore {
        self.store
    }

    /// Loop until option 8 or end of input.
    pub fn run(&mut self) -> AppResult<()> {
        header("Study Tracker");
        if self.partial {
            warning(PARTIAL_LOAD);
        }

        loop {
            println!("\n{MENU}");
            let Some(choice) = self.ask("Enter your choice: ")? else {
                break;
            };

            let choice: u32 = match choice.trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    error("Invalid input. Please enter a number.");
                    continue;
                }
            };

            if self.partial && matches!(choice, 1 | 3 | 4) {
                error(PARTIAL_LOAD);
                continue;
            }

            let result = match choice {
                1 => self.add(),
                2 => {
                    self.show_all();
                    Ok(())
                }
                3 => self.edit(),
                4 => self.delete(),
                5 => {
                    print_summary(self.store.list(), SummaryKind::Date, self.cfg.separator());
                    Ok(())
                }
                6 => {
                    print_summary(self.store.list(), SummaryKind::Subject, self.cfg.separator());
                    Ok(())
                }
                7 => self.export(),
                8 => break,
                _ => {
                    error("Invalid option. Please choose a number from the menu.");
                    Ok(())
                }
            };

            if let Err(e) = result {
                error(e);
            }
        }

        success("Thank you for using the Study Tracker!");
        Ok(())
    }

    /// Print `label` and read one line without its line ending; `None` at end of input.
    fn ask(&mut self, label: &str) -> AppResult<Option<String>> {
        print!("{label}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn add(&mut self) -> AppResult<()> {
        header("Enter new study log details");

        let Some(date) = self.ask("Enter date (YYYY-MM-DD) or leave blank for today: ")? else {
            return Ok(());
        };
        let Some(subject) = self.ask("Enter the subject name: ")? else {
            return Ok(());
        };
        let Some(duration) = self.ask("Enter the study duration in hours: ")? else {
            return Ok(());
        };
        // checked before asking for the description
        if let Err(e) = parse_hours(&duration) {
            error(format!("{e}. Log cancelled."));
            return Ok(());
        }
        let Some(description) = self.ask("Enter a brief description: ")? else {
            return Ok(());
        };

        let outcome = AddLogic::apply(
            &mut self.store,
            AddRequest {
                date: Some(date.as_str()),
                subject: &subject,
                duration: &duration,
                description: &description,
            },
        )?;

        if let Some(bad) = &outcome.date_fallback {
            warning(format!("Invalid date '{bad}'. Using today's date."));
        }
        success("Study log saved successfully!");
        ttlog(
            self.cfg,
            "add",
            &format!("#{}", outcome.position),
            &outcome.record.to_string(),
        );
        Ok(())
    }

    fn show_all(&self) {
        header("All study logs");
        if self.store.is_empty() {
            info("Database is empty. Nothing to display.");
        } else {
            print!("{}", records_table(self.store.list(), self.cfg.separator()));
        }
    }

    /// Show the numbered list and read a position. `None` when there is nothing to pick.
    fn pick(&mut self, action: &str) -> AppResult<Option<usize>> {
        if self.store.is_empty() {
            info("Database is empty. Nothing to select.");
            return Ok(None);
        }
        self.show_all();

        let Some(raw) = self.ask(&format!("\nEnter the number of the log to {action}: "))? else {
            return Ok(None);
        };
        raw.trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| AppError::Parse(format!("'{}' is not a log number", raw.trim())))
    }

    fn edit(&mut self) -> AppResult<()> {
        let Some(position) = self.pick("edit")? else {
            return Ok(());
        };
        let current = self.store.get(position)?.clone();

        println!("\nEditing log: {current}");
        println!("(Press Enter to keep the current value)");

        let Some(subject) = self.ask(&format!("Enter new subject (current: {}): ", current.subject))?
        else {
            return Ok(());
        };
        let Some(duration) = self.ask(&format!(
            "Enter new duration (current: {}): ",
            format_hours(current.duration)
        ))?
        else {
            return Ok(());
        };
        let Some(description) = self.ask(&format!(
            "Enter new description (current: {}): ",
            current.description
        ))?
        else {
            return Ok(());
        };

        let outcome = EditLogic::apply(
            &mut self.store,
            position,
            EditRequest {
                subject: Some(subject.as_str()),
                duration: Some(duration.as_str()),
                description: Some(description.as_str()),
            },
        )?;

        if let Some(e) = &outcome.rejected_duration {
            warning(format!("{e}. Keeping original duration."));
        }
        if outcome.changed {
            let record = self.store.get(position)?;
            success("Log updated successfully!");
            ttlog(self.cfg, "edit", &format!("#{position}"), &record.to_string());
        } else {
            info("Nothing changed.");
        }
        Ok(())
    }

    fn delete(&mut self) -> AppResult<()> {
        let Some(position) = self.pick("delete")? else {
            return Ok(());
        };
        let record = self.store.get(position)?.clone();

        if self.cfg.confirm_delete {
            warning(format!("Delete study log #{position}: {record}?"));
            print!("Confirm [y/N]: ");
            io::stdout().flush()?;
            if !confirm(&mut self.input)? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&mut self.store, position)?;
        success("Log deleted successfully!");
        ttlog(self.cfg, "del", &format!("#{position}"), &removed.to_string());
        Ok(())
    }

    fn export(&mut self) -> AppResult<()> {
        let target = ExportTarget::Dated {
            dir: self.cfg.export_dir_path(),
            day: today(),
        };
        let path = ExportLogic::export(self.store.list(), ExportFormat::Csv, &target)?;
        ttlog(
            self.cfg,
            "export",
            &path.to_string_lossy(),
            &format!("{} log(s) exported as csv", self.store.len()),
        );
        Ok(())
    }
}
