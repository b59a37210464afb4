pub mod ledger;
pub mod randomness;
pub mod winner_selector;
