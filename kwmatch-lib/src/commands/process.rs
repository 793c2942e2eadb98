use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::source::ReportKind;
use crate::views::{MatchTypePass, SearchTermPass};
use clap::Parser;

#[derive(Parser, Debug)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Reads keyword-view rows and reports the match type comparison and campaign views
pub fn process_match_types<H: Host>(host: &mut H, args: &ProcessArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let pass = MatchTypePass::new(common.pass_options()?);
    let tables = common.process(pass, ReportKind::KeywordView)?;

    common.report(&tables)
}

/// Reads search-term-view rows and reports the search term comparison views
pub fn process_search_terms<H: Host>(host: &mut H, args: &ProcessArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let pass = SearchTermPass::new(common.pass_options()?);
    let tables = common.process(pass, ReportKind::SearchTermView)?;

    common.report(&tables)
}
