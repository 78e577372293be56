//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Two "screens" share the coordinator: the weekly schedule view and the
//! favorites list, plus a group picker with incremental search. Subject and
//! weekday colors are a cosmetic concern and live here, not in the core.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use crossterm::style::{Color, Stylize};
use indicatif::ProgressBar;
use inquire::{InquireError, Select, Text};
use tracing::warn;

use crate::domain::{DomainError, GroupPart, Lesson, ScheduleDay, StudentGroup};
use crate::ports::InputPort;
use crate::usecases::{LoadPhase, ScheduleService, SharedSelection};

const MENU_SCHEDULE: &str = "View week schedule";
const MENU_REFRESH: &str = "Refresh schedule";
const MENU_PICK: &str = "Pick a group";
const MENU_TOGGLE: &str = "Toggle favorite for current group";
const MENU_FAVORITES: &str = "Favorites";
const MENU_QUIT: &str = "Quit";

/// TUI adapter. Inquire prompts over the schedule coordinator.
pub struct TuiInputPort {
    service: Arc<ScheduleService>,
    selection: SharedSelection,
    /// Group name restored from configuration, if any.
    restore_group: Option<String>,
}

impl TuiInputPort {
    pub fn new(
        service: Arc<ScheduleService>,
        selection: SharedSelection,
        restore_group: Option<String>,
    ) -> Self {
        Self {
            service,
            selection,
            restore_group,
        }
    }

    /// Load the group list on first entry. Load failures land in the view
    /// state and are rendered; the user retries via "Refresh schedule".
    async fn ensure_loaded(&self) {
        if self.service.snapshot().await.phase != LoadPhase::Uninitialized {
            return;
        }
        let spinner = spinner("Loading groups...");
        let result = self
            .service
            .load_groups(self.restore_group.as_deref())
            .await;
        spinner.finish_and_clear();
        if let Err(e) = result {
            warn!(error = %e, "initial group load failed");
        }
    }

    /// Re-fetch the current group's week, or retry the group list when
    /// nothing is selected yet.
    async fn refresh(&self) -> Result<(), DomainError> {
        match self.service.selected().await {
            Some(group) => {
                let spinner = spinner("Loading schedule...");
                let result = self.service.select_group(&group.name).await;
                spinner.finish_and_clear();
                if let Err(e) = result {
                    warn!(error = %e, "schedule refresh failed");
                }
            }
            None => {
                let spinner = spinner("Loading groups...");
                let result = self
                    .service
                    .load_groups(self.restore_group.as_deref())
                    .await;
                spinner.finish_and_clear();
                if let Err(e) = result {
                    warn!(error = %e, "group list retry failed");
                }
            }
        }
        self.show_schedule().await
    }

    async fn show_schedule(&self) -> Result<(), DomainError> {
        let st = self.service.snapshot().await;
        if let Some(group) = &st.selected {
            let star = if self.service.is_favorite(&group.name).await.unwrap_or(false) {
                "★"
            } else {
                "☆"
            };
            println!(
                "\n{star} {} — course {}, {}",
                group.name.clone().bold(),
                group.course,
                group.specialty
            );
        }
        match &st.phase {
            LoadPhase::Uninitialized => println!("Nothing loaded yet"),
            LoadPhase::Error(msg) => println!("{}", msg.clone().red()),
            _ if st.schedule.is_empty() => println!("No lessons this week"),
            _ => {
                for day in &st.schedule {
                    render_day(day);
                }
            }
        }
        Ok(())
    }

    async fn pick_group(&self) -> Result<(), DomainError> {
        self.ensure_loaded().await;
        let Some(query) = cancelled(
            Text::new("Search groups:")
                .with_help_message("name or specialty, empty for all")
                .prompt(),
        )?
        else {
            return Ok(());
        };

        let matches = self.service.filter_groups(query.trim()).await;
        if matches.is_empty() {
            println!("No groups match '{}'", query.trim());
            return Ok(());
        }

        let options: Vec<String> = matches.iter().map(format_group).collect();
        let Some(picked) = cancelled(Select::new("Select group", options.clone()).prompt())?
        else {
            return Ok(());
        };
        // Map the selected display string back to the group (match full option string)
        let Some(group) = matches
            .iter()
            .zip(&options)
            .find(|(_, option)| **option == picked)
            .map(|(group, _)| group)
        else {
            return Ok(());
        };

        let spinner = spinner("Loading schedule...");
        let result = self.service.select_group(&group.name).await;
        spinner.finish_and_clear();
        if let Err(e) = result {
            warn!(error = %e, "schedule fetch failed");
        }
        self.show_schedule().await
    }

    async fn toggle_current(&self) -> Result<(), DomainError> {
        let Some(group) = self.service.selected().await else {
            println!("No group selected yet");
            return Ok(());
        };
        let now_favorite = self.service.toggle_favorite(&group.name).await?;
        if now_favorite {
            println!("★ {} added to favorites", group.name);
        } else {
            println!("☆ {} removed from favorites", group.name);
        }
        Ok(())
    }

    async fn favorites_screen(&self) -> Result<(), DomainError> {
        const OPEN: &str = "Open a group";
        const REMOVE: &str = "Remove a group";
        const BACK: &str = "Back";

        let favorites = self.service.favorites().await?;
        if favorites.is_empty() {
            println!("No favorite groups yet. Add some from the schedule screen.");
            return Ok(());
        }

        let Some(action) = cancelled(Select::new("Favorites", vec![OPEN, REMOVE, BACK]).prompt())?
        else {
            return Ok(());
        };
        let names: Vec<String> = favorites.iter().cloned().collect();

        match action {
            OPEN => {
                let Some(name) = cancelled(Select::new("Open group", names).prompt())? else {
                    return Ok(());
                };
                // Publish through the shared holder, then replay into the
                // coordinator. The holder bridge observes the same publish;
                // its second call is filtered by the dedupe guard.
                self.selection.set(&name);
                let spinner = spinner("Loading schedule...");
                let result = self.service.on_external_selection_changed(&name).await;
                spinner.finish_and_clear();
                if let Err(e) = result {
                    warn!(error = %e, "schedule fetch failed");
                }
                self.show_schedule().await?;
            }
            REMOVE => {
                let Some(name) = cancelled(Select::new("Remove from favorites", names).prompt())?
                else {
                    return Ok(());
                };
                self.service.remove_favorite(&name).await?;
                println!("☆ {name} removed from favorites");
            }
            _ => {}
        }
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        self.ensure_loaded().await;
        self.show_schedule().await?;

        loop {
            println!();
            let options = vec![
                MENU_SCHEDULE,
                MENU_REFRESH,
                MENU_PICK,
                MENU_TOGGLE,
                MENU_FAVORITES,
                MENU_QUIT,
            ];
            let Some(choice) = cancelled(Select::new("Main menu", options).prompt())? else {
                break;
            };
            match choice {
                MENU_SCHEDULE => self.show_schedule().await?,
                MENU_REFRESH => self.refresh().await?,
                MENU_PICK => self.pick_group().await?,
                MENU_TOGGLE => self.toggle_current().await?,
                MENU_FAVORITES => self.favorites_screen().await?,
                MENU_QUIT => break,
                _ => {}
            }
        }
        Ok(())
    }
}

/// Esc/Ctrl-C on a prompt means "back", not an error.
fn cancelled<T>(result: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Input(e.to_string())),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn format_group(group: &StudentGroup) -> String {
    format!(
        "{} — course {}, {}",
        group.name, group.course, group.specialty
    )
}

fn render_day(day: &ScheduleDay) {
    let color = weekday_color(&day.weekday);
    println!(
        "\n{}  {}",
        day.weekday.to_uppercase().with(color).bold(),
        day.date.format("%Y-%m-%d")
    );
    if day.lessons.is_empty() {
        println!("  no lessons");
        return;
    }
    for lesson in &day.lessons {
        render_lesson(lesson);
    }
}

fn render_lesson(lesson: &Lesson) {
    println!("  Lesson {}  {}", lesson.number, lesson.time);
    let last = lesson.parts.len().saturating_sub(1);
    for (i, part) in lesson.parts.iter().enumerate() {
        let who = match &part.part {
            GroupPart::Whole => "whole group".to_string(),
            GroupPart::Subgroup(n) => format!("subgroup {n}"),
        };
        println!(
            "    {} [{who}]",
            part.detail
                .subject
                .clone()
                .with(subject_color(&part.detail.subject))
        );
        println!(
            "      {} ({})",
            part.detail.teacher, part.detail.teacher_position
        );
        println!(
            "      room {}, building {}, {}",
            part.detail.classroom, part.detail.building, part.detail.address
        );
        if i != last {
            println!("      ────────");
        }
    }
}

fn subject_color(subject: &str) -> Color {
    match subject {
        "Mathematics" => Color::Green,
        "Programming" => Color::Magenta,
        "Databases" => Color::Yellow,
        "Physics" => Color::Red,
        "English" => Color::Blue,
        "Computer Networks" => Color::Cyan,
        _ => Color::White,
    }
}

fn weekday_color(weekday: &str) -> Color {
    match weekday {
        "Monday" => Color::Magenta,
        "Tuesday" => Color::Blue,
        "Wednesday" => Color::Cyan,
        "Thursday" => Color::Green,
        "Friday" => Color::Yellow,
        "Saturday" => Color::DarkCyan,
        _ => Color::Grey,
    }
}
