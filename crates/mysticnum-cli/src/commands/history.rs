use clap::Args;

use mysticnum_core::traits::ICalculationStorage;

use crate::context::AppContext;

#[derive(Args)]
pub struct HistoryArgs {
    /// Show at most this many entries
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,

    /// Only entries for this birth date (oldest retained match)
    #[arg(long)]
    pub date: Option<String>,
}

pub fn handle(ctx: &AppContext, args: HistoryArgs) -> anyhow::Result<()> {
    let storage = ctx.storage()?;
    let entries = match args.date {
        Some(date) => storage.find_calculation_by_date(&date)?.into_iter().collect(),
        None => storage.calculation_history()?,
    };
    if entries.is_empty() {
        println!("No stored calculations.");
        return Ok(());
    }
    for calc in entries.iter().take(args.limit) {
        println!(
            "{}  {}  {:<6}  {}",
            calc.timestamp.format("%Y-%m-%d %H:%M"),
            calc.birth_date,
            calc.gender.as_str(),
            calc.id
        );
    }
    Ok(())
}
