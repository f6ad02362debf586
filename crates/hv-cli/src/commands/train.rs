use colored::Colorize;
use hv_core::{Attribute, Character};
use hv_mechanics::{GainOptions, ProficiencyGainEngine, StandardCurve, attribute_factor};

pub fn run(skill: &str, level: u32, scores: [f64; 5], attempts: u32) -> Result<(), String> {
    let [strength, dexterity, constitution, intelligence, wisdom] = scores;
    let mut character = Character::new("trainee")
        .at_level(level)
        .attribute(Attribute::Strength, strength)
        .attribute(Attribute::Dexterity, dexterity)
        .attribute(Attribute::Constitution, constitution)
        .attribute(Attribute::Intelligence, intelligence)
        .attribute(Attribute::Wisdom, wisdom);

    let factor = attribute_factor(skill, &character.attributes);
    println!(
        "  {} at level {level}, attribute factor {factor:.3}",
        skill.bold()
    );
    println!();

    let engine = ProficiencyGainEngine::<StandardCurve>::default();
    for attempt in 1..=attempts {
        let value = engine.gain(&mut character, skill, GainOptions::default());
        println!("  attempt {attempt:>3}: proficiency {value:.2}");
    }

    Ok(())
}
