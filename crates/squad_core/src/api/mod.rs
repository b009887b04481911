pub mod balance_json;

pub use balance_json::{
    balance_request, balance_teams_json, BalanceMode, BalanceOutcome, BalanceRequest,
    BalanceResponse,
};
