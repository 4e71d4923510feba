use std::process::ExitCode;

use boulange::{
    game::Game,
    io::sys::{ansi::AnsiIo, IoSystem},
};

fn main() -> ExitCode {
    let mut io = match AnsiIo::get() {
        Ok(io) => io,
        Err(e) => {
            eprintln!("impossible de prendre la main sur le terminal : {e}");
            return ExitCode::FAILURE;
        }
    };
    let res = Game::new().run(&mut io);
    io.stop();
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("erreur d'entrée/sortie : {e}");
            ExitCode::FAILURE
        }
    }
}
