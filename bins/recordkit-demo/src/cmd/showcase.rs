use std::io::Write;

use recordkit_api::RecordBuilder;

use super::config::{Effective, Scenario};
use super::domain::{NewPersonRecord, NewPersonRecordBuilder, PersonB, PersonRecord};
use super::error::DemoError;
use super::render::{write_lines, Line};

// ═══════════════════════════════════════════════════════════════
//  Script — the values each scenario plugs in
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, RecordBuilder)]
pub struct Script {
    #[record(copy, default = "1")]
    seed_id: u32,
    #[record(into, default = "String::from(\"Angelo\")")]
    seed_name: String,

    /// Id given to the seeded copy in the builder scenario.
    #[record(copy, default = "2")]
    new_id: u32,

    #[record(into, default = "String::from(\"Zero\")")]
    renamed: String,
    #[record(copy, default = "2")]
    bumped_id: u32,
    #[record(copy, default = "3")]
    bulk_id: u32,
    #[record(into, default = "String::from(\"Jake\")")]
    bulk_name: String,
    #[record(copy, default = "4")]
    staged_id: u32,
    #[record(into, default = "String::from(\"Java\")")]
    staged_name: String,
    /// Appended only when the staged name is still in place.
    #[record(into, default = "String::from(\" is cool!\")")]
    conditional_suffix: String,
    #[record(copy, default = "25")]
    final_id: u32,
}

// ═══════════════════════════════════════════════════════════════
//  Scenarios
// ═══════════════════════════════════════════════════════════════

/// Fresh builder, then a builder seeded from the result with a new id.
pub fn builder_scenario(script: &Script) -> Result<Vec<Line>, DemoError> {
    let angelo = PersonRecord::builder()
        .id(script.seed_id())
        .name(script.seed_name().as_str())
        .build()?;
    let angelo_with_new_id = PersonRecord::builder_from(&angelo)
        .id(script.new_id())
        .build()?;

    tracing::debug!(original = ?angelo, copy = ?angelo_with_new_id, "builder scenario done");

    Ok(vec![
        Line::field("Name", angelo.name()),
        Line::field("Old id", angelo.id()),
        Line::field("New id", angelo_with_new_id.id()),
        Line::Break,
    ])
}

/// Chained copies: single-field helpers, a seeded builder, two bulk
/// `with` calls (one conditional) and a static `from`.
pub fn with_scenario(script: &Script) -> Result<Vec<Line>, DemoError> {
    let p1 = NewPersonRecord::new(script.seed_id(), script.seed_name().as_str());
    let p2 = p1.with_name(script.renamed().as_str());
    let p3 = p2.with_id(script.bumped_id());
    let p4 = p3
        .to_builder()
        .id(script.bulk_id())
        .name(script.bulk_name().as_str())
        .build()?;
    let p5 = p4.with(|person| {
        person
            .set_id(script.staged_id())
            .set_name(script.staged_name().as_str());
    });
    let p6 = p5.with(|person| {
        if let Some(name) = person.get_name().filter(|name| *name == script.staged_name()) {
            let extended = format!("{name}{}", script.conditional_suffix());
            person.set_name(extended);
        }
    });
    let p7 = NewPersonRecordBuilder::from(&p6)
        .id(script.final_id())
        .build()?;

    tracing::debug!(first = ?p1, last = ?p7, "with scenario done");

    Ok([&p1, &p2, &p3, &p4, &p5, &p6, &p7]
        .iter()
        .enumerate()
        .map(|(i, p)| Line::person(format!("P{}", i + 1), p.id(), p.name()))
        .collect())
}

/// Mutable data class built three ways; all three must agree.
pub fn data_scenario(script: &Script) -> Result<Vec<Line>, DemoError> {
    let mut no_args = PersonB::default();
    no_args.set_id(script.seed_id());
    no_args.set_name(script.seed_name().as_str());

    let all_args = PersonB::new(script.seed_id(), script.seed_name().as_str());

    let built = PersonB::builder()
        .id(script.seed_id())
        .name(script.seed_name().as_str())
        .build()?;

    let agree = no_args == all_args && all_args == built;
    if !agree {
        tracing::warn!(?no_args, ?all_args, ?built, "data class constructions disagree");
    }

    Ok(vec![
        Line::person("B1", no_args.id(), no_args.name()),
        Line::person("B2", all_args.id(), all_args.name()),
        Line::person("B3", built.id(), built.name()),
        Line::field("Equal", agree),
    ])
}

pub fn run<W: Write>(eff: &Effective, out: &mut W) -> Result<(), DemoError> {
    let script = &eff.script;
    let lines = match eff.scenario {
        Scenario::Builder => builder_scenario(script)?,
        Scenario::With => with_scenario(script)?,
        Scenario::Data => data_scenario(script)?,
        Scenario::All => {
            let mut lines = builder_scenario(script)?;
            lines.extend(with_scenario(script)?);
            lines.push(Line::Break);
            lines.extend(data_scenario(script)?);
            lines
        }
    };

    tracing::info!(scenario = ?eff.scenario, lines = lines.len(), "showcase finished");
    write_lines(out, &lines, eff.format)
}
