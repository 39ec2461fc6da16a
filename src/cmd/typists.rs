use crate::reports::tables;
use thaikey::profiles::all_profiles;

pub fn run() {
    let infos: Vec<_> = all_profiles().iter().map(|p| p.info()).collect();
    tables::typists(&infos);
}
