mod helpers;

mod cli_test;
mod config_test;
mod controller_test;
mod replay_test;
