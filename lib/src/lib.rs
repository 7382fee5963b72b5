mod cache;
mod data;
mod pool;
mod results;
mod scorers;
mod session;

pub use cache::*;
pub use data::WordBank;
pub use pool::CandidatePool;
pub use results::*;
pub use scorers::*;
pub use session::*;
