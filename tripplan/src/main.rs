use clap::Parser;
use tripplan::app::{TripPlanApp, TripPlanAppError};

fn main() -> Result<(), TripPlanAppError> {
    env_logger::init();
    let args = TripPlanApp::parse();
    args.op.run()
}
