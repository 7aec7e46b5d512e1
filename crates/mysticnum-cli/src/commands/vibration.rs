use clap::Args;

use mysticnum_core::models::VibrationReading;
use mysticnum_engine::{apartment_number, car_number};

use crate::context::AppContext;

#[derive(Args)]
pub struct CarArgs {
    pub plate: String,
}

#[derive(Args)]
pub struct ApartmentArgs {
    pub number: String,
}

pub fn handle_car(ctx: &AppContext, args: CarArgs) -> anyhow::Result<()> {
    print_reading(&car_number(&args.plate, &ctx.knowledge));
    Ok(())
}

pub fn handle_apartment(ctx: &AppContext, args: ApartmentArgs) -> anyhow::Result<()> {
    print_reading(&apartment_number(&args.number, &ctx.knowledge));
    Ok(())
}

fn print_reading(reading: &VibrationReading) {
    println!("{} -> {}", reading.input, reading.number);
    if let Some(text) = &reading.text {
        println!("{text}");
    }
}
