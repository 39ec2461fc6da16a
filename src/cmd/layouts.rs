use crate::reports::tables;
use clap::Args;
use thaikey::layouts::{compare_digit_costs, get_all_layouts};
use thaikey::profiles::DEFAULT_KEYSTROKE_TIME;

#[derive(Args, Debug, Clone)]
pub struct LayoutsArgs {
    /// Seconds per keystroke used for the digit cost columns
    #[arg(long, default_value_t = DEFAULT_KEYSTROKE_TIME)]
    pub keystroke_time: f64,
}

pub fn run(args: &LayoutsArgs) {
    tables::layout_info(&get_all_layouts());
    tables::digit_comparison(&compare_digit_costs(args.keystroke_time), args.keystroke_time);
}
