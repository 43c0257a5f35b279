//! Prompt command - print the explanation request for the current shortlist

use anyhow::{Context, Result};

use crate::cli::MatchArgs;
use crate::reasoning::ReasoningRequest;

pub fn run(args: &MatchArgs) -> Result<()> {
	let persona = super::load_persona(&args.persona)?;
	let engine = super::load_engine(args.catalog.clone())?;
	let ranked = engine.recommend(&persona, args.limit)?;

	let request = ReasoningRequest::new(&persona, &ranked);
	println!("{}", request.to_json().context("Failed to serialize request")?);

	Ok(())
}
