use clap::Args;

use mysticnum_core::traits::IPracticeStorage;
use mysticnum_knowledge::search;

use crate::context::AppContext;

#[derive(Args)]
pub struct SearchArgs {
    pub query: String,
}

pub fn handle_search(ctx: &AppContext, args: SearchArgs) -> anyhow::Result<()> {
    let hits = search(&ctx.knowledge, &args.query, &ctx.config.library);
    if hits.is_empty() {
        println!("Nothing found.");
    }
    for hit in hits {
        println!("[{:?}] {}: {}", hit.section, hit.key, hit.snippet);
    }
    Ok(())
}

pub fn handle_stats(ctx: &AppContext) -> anyhow::Result<()> {
    let stats = ctx.storage()?.stats(chrono::Utc::now())?;
    let kb = ctx.knowledge.stats();
    println!("Calculations:          {}", stats.total_calculations);
    println!("Active practices:      {}", stats.total_practices);
    println!("Completed practices:   {}", stats.completed_practices);
    println!("Completed this month:  {}", stats.practices_this_month);
    println!(
        "Knowledge entries:     {} tasks, {} matrix, {} vibrations",
        kb.tasks, kb.matrix, kb.vibrations
    );
    Ok(())
}
