mod queries;
mod stats;
