//! Plate and apartment number vibrations.

use mysticnum_core::models::VibrationReading;
use mysticnum_core::traits::KnowledgeSource;

use crate::derive::reduce_to_single;

/// Letter values for vehicle plates. Cyrillic plate letters and their Latin
/// look-alikes share a value.
fn letter_value(ch: char) -> Option<u32> {
    match ch {
        'А' | 'A' | 'Т' | 'T' => Some(1),
        'В' | 'B' | 'У' | 'Y' => Some(2),
        'Е' | 'E' | 'Х' | 'X' => Some(3),
        'К' | 'K' => Some(4),
        'М' | 'M' => Some(5),
        'Н' | 'H' => Some(6),
        'О' | 'O' => Some(7),
        'Р' | 'P' => Some(8),
        'С' | 'C' => Some(9),
        _ => None,
    }
}

/// Reduced vibration of a vehicle plate. Letters without a value and any
/// other characters are skipped; a plate with nothing countable reads 0.
pub fn car_number<K>(plate: &str, knowledge: &K) -> VibrationReading
where
    K: KnowledgeSource + ?Sized,
{
    let sum = plate
        .chars()
        .flat_map(char::to_uppercase)
        .filter_map(|ch| ch.to_digit(10).or_else(|| letter_value(ch)))
        .sum();
    reading(plate, reduce_to_single(sum), knowledge)
}

/// Reduced vibration of an apartment number. Non-digits are skipped.
pub fn apartment_number<K>(number: &str, knowledge: &K) -> VibrationReading
where
    K: KnowledgeSource + ?Sized,
{
    let sum = number.chars().filter_map(|ch| ch.to_digit(10)).sum();
    reading(number, reduce_to_single(sum), knowledge)
}

fn reading<K>(input: &str, number: u32, knowledge: &K) -> VibrationReading
where
    K: KnowledgeSource + ?Sized,
{
    VibrationReading {
        input: input.to_string(),
        number,
        text: knowledge.vibration(&number.to_string()).map(str::to_string),
    }
}
