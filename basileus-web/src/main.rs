use basileus_web_lib::{log_error, run, window_conf};

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        log_error(&format!("failed to start match: {err}"));
        std::process::exit(1);
    }
}
