use clap::Args;

use mysticnum_core::models::{CalculationRecord, Gender};
use mysticnum_core::traits::ICalculationStorage;
use mysticnum_core::AnalysisResult;
use mysticnum_engine::{render_grid, MatrixEngine};

use crate::context::AppContext;

#[derive(Args)]
pub struct CalcArgs {
    /// Birth date as DD.MM.YYYY
    pub date: String,

    /// female or male (defaults to engine.default_gender)
    #[arg(short, long)]
    pub gender: Option<Gender>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    /// Store the result in the calculation history
    #[arg(long)]
    pub save: bool,
}

pub fn handle(ctx: &AppContext, args: CalcArgs) -> anyhow::Result<()> {
    let gender = args.gender.unwrap_or(ctx.config.engine.default_gender);
    let result = MatrixEngine::new().compute(&args.date, gender, &ctx.knowledge)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }

    if args.save {
        let id = ctx
            .storage()?
            .save_calculation(&CalculationRecord::from_result(&result))?;
        println!("\nSaved as {id}");
    }
    Ok(())
}

pub fn print_report(result: &AnalysisResult) {
    let d = &result.derived;
    println!("Date: {} ({})", result.date, result.birth.gender);
    match d.addend {
        Some(addend) => println!(
            "Derived numbers: {}, {}, {}, {}, {}",
            d.first, d.second, addend, d.third, d.fourth
        ),
        None => println!(
            "Derived numbers: {}, {}, {}, {}",
            d.first, d.second, d.third, d.fourth
        ),
    }
    println!(
        "Birth number: {}  Life path: {}",
        result.birth_number, result.life_path
    );
    println!();
    println!("{}", render_grid(&result.matrix));
    println!();
    println!("Personal task ({}): {}", d.second, result.personal_task);
    println!("Ancestral task ({}): {}", d.fourth, result.ancestral_task);

    if !result.interpretations.is_empty() {
        println!("\nInterpretations:");
        for (position, interp) in &result.interpretations {
            println!("  {position} [{}] {}", interp.value, interp.text);
        }
    }
    if !result.ancestral_programs.is_empty() {
        println!("\nAncestral programs:");
        for program in &result.ancestral_programs {
            println!("  {:?}: {}. {}", program.kind, program.title, program.description);
        }
    }
    if !result.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &result.warnings {
            println!("  {:?}: {}. {}", warning.level, warning.title, warning.description);
        }
    }
}
