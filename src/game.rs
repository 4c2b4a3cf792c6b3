use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::command::{Command, parse_command};
use crate::deck::clock_seed;
use crate::engine::Solitaire;
use crate::renderer::Renderer;

/// The interactive game loop. `renderer` is injected so the engine stays
/// renderer-agnostic.
pub struct Game<R: Renderer> {
    solitaire: Solitaire,
    renderer: R,
}

impl<R: Renderer> Game<R> {
    pub fn new(solitaire: Solitaire, renderer: R) -> Self {
        Game {
            solitaire,
            renderer,
        }
    }

    /// Deal a game from `seed`, or from the clock when none is given.
    pub fn init(seed: Option<u64>, mut renderer: R) -> Self {
        let seed = seed.unwrap_or_else(clock_seed);
        renderer.info(&format!("Dealing game #{}.", seed));
        Self::new(Solitaire::new_seeded(seed), renderer)
    }

    pub fn solitaire(&self) -> &Solitaire {
        &self.solitaire
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Read commands from `input` until the player quits or input ends,
    /// re-rendering the board after every command.
    pub fn run<I: BufRead>(&mut self, mut input: I) -> io::Result<()> {
        let mut stdout = io::stdout();
        self.renderer.render(&self.solitaire);

        loop {
            print!("Enter command (s = draw from stock, m = move, z = undo): ");
            stdout.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF
                break;
            }

            match parse_command(&line) {
                Err(e) => {
                    debug!(input = line.trim(), error = %e, "unparsed command");
                    self.renderer.error("Invalid command");
                    self.renderer.error(&e);
                }
                Ok(cmd) => {
                    if self.handle(cmd) {
                        break;
                    }
                }
            }
            self.renderer.render(&self.solitaire);
        }

        info!(moves = self.solitaire.history().len(), "session ended");
        Ok(())
    }

    /// Dispatch a command. Returns `true` if the game should exit.
    pub fn handle(&mut self, cmd: Command) -> bool {
        let result = match cmd {
            Command::Quit => {
                self.renderer.info("Thanks for playing. Goodbye!");
                return true;
            }
            Command::Help => {
                self.renderer.help();
                return false;
            }
            Command::NewGame => {
                let seed = clock_seed();
                self.solitaire = Solitaire::new_seeded(seed);
                self.renderer
                    .info(&format!("A new game has been dealt (game #{}).", seed));
                return false;
            }
            Command::Draw => self.solitaire.draw_from_stock(),
            Command::Move {
                source,
                destination,
                count,
            } => self.solitaire.move_cards(&source, &destination, count),
            Command::Undo => self
                .solitaire
                .undo()
                .map(|()| self.renderer.info("Undo successful")),
        };

        if let Err(e) = result {
            self.renderer.error(e.message());
        }
        false
    }
}
