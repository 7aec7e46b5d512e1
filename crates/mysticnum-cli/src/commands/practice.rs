use clap::Subcommand;

use mysticnum_core::models::Practice;
use mysticnum_core::traits::IPracticeStorage;

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum PracticeCommands {
    /// Save a new active practice
    Save {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(long)]
        duration: Option<String>,
    },
    /// List active (or completed) practices
    List {
        #[arg(long)]
        completed: bool,
    },
    /// Mark an active practice as completed
    Complete {
        id: String,
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// Remove an active practice
    Delete { id: String },
}

pub fn handle(ctx: &AppContext, action: PracticeCommands) -> anyhow::Result<()> {
    let storage = ctx.storage()?;
    match action {
        PracticeCommands::Save {
            title,
            description,
            duration,
        } => {
            let mut practice = Practice::new(title, description);
            practice.duration = duration;
            if storage.save_practice(&practice)? {
                println!("Saved.");
            } else {
                println!("An active practice with that title already exists.");
            }
        }
        PracticeCommands::List { completed } => {
            let practices = if completed {
                storage.completed_practices()?
            } else {
                storage.active_practices()?
            };
            for p in &practices {
                let duration = p.duration.as_deref().unwrap_or("-");
                println!("{}  {}  ({duration})", p.id, p.title);
                if !p.description.is_empty() {
                    println!("    {}", p.description);
                }
            }
            if practices.is_empty() {
                println!("No practices.");
            }
        }
        PracticeCommands::Complete { id, notes } => {
            if storage.complete_practice(&id, &notes)? {
                println!("Completed {id}.");
            } else {
                anyhow::bail!("no active practice with id {id}");
            }
        }
        PracticeCommands::Delete { id } => {
            storage.delete_practice(&id)?;
            println!("Deleted {id}.");
        }
    }
    Ok(())
}
