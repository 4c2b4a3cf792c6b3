use crossterm::style::Stylize;

use crate::board::Board;
use crate::card::Card;
use crate::engine::Solitaire;
use crate::pile::PileId;

/// Trait that abstracts the rendering layer, so the game loop does not care
/// where the board ends up.
pub trait Renderer {
    /// Render the full game board.
    fn render(&mut self, game: &Solitaire);
    /// Display an informational message.
    fn info(&mut self, msg: &str);
    /// Display an error message.
    fn error(&mut self, msg: &str);
    /// Display the help text.
    fn help(&mut self);
}

// ---------------------------------------------------------------------------
// CLI Renderer
// ---------------------------------------------------------------------------

/// Plain terminal renderer. Red suits are coloured unless disabled.
pub struct CliRenderer {
    color: bool,
}

impl CliRenderer {
    pub fn new(color: bool) -> Self {
        CliRenderer { color }
    }

    fn card_str(&self, card: Card) -> String {
        let label = card.label();
        if self.color && card.suit.is_red() {
            label.red().to_string()
        } else {
            label
        }
    }

    /// `[top]` of a pile, or `[ ]` when empty.
    fn top_str(&self, board: &Board, id: PileId) -> String {
        match board.top_of(id) {
            Some(card) => format!("[{}]", self.card_str(card)),
            None => "[ ]".to_string(),
        }
    }

    /// A tableau column bottom to top; face-down cards are hidden.
    fn column_str(&self, cards: &[Card]) -> String {
        if cards.is_empty() {
            return "[ ]".to_string();
        }
        cards
            .iter()
            .map(|&c| {
                if c.face_up {
                    self.card_str(c)
                } else {
                    "[ ]".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Renderer for CliRenderer {
    fn render(&mut self, game: &Solitaire) {
        let board = game.board();

        println!();
        println!("Stock   | Waste  | Foundation 1 | Foundation 2 | Foundation 3 | Foundation 4");
        println!("--------|--------|--------------|--------------|--------------|--------------");

        let mut row = vec![
            format!("{} ({})", self.top_str(board, PileId::Stock), board.stock.len()),
            self.top_str(board, PileId::Waste),
        ];
        row.extend((0..board.foundations.len()).map(|i| self.top_str(board, PileId::Foundation(i))));
        println!("{}", row.join("   |   "));

        println!();
        println!("Columns:");
        for (i, column) in board.columns.iter().enumerate() {
            println!(
                "Column {} ({} cards): {}",
                i + 1,
                column.len(),
                self.column_str(column)
            );
        }

        if let Some(last) = game.history().last() {
            println!();
            println!("Last move: {}", last);
        }
        println!();
    }

    fn info(&mut self, msg: &str) {
        if self.color {
            println!("{} {}", "[INFO]".cyan(), msg);
        } else {
            println!("[INFO] {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        if self.color {
            println!("{} {}", "[ERR ]".red(), msg);
        } else {
            println!("[ERR ] {}", msg);
        }
    }

    fn help(&mut self) {
        println!(
            r#"
Commands:
  s                          Draw a card from the stock onto the waste
  m <source> <dest> <count>  Move the top <count> cards between piles
  z                          Undo the last move (one level only)
  new                        Deal a new game
  help | h | ?               Show this help
  quit | q                   Exit

Piles: stock, waste, f1..f4 (foundations), c1..c7 (columns)
Example: m c7 c3 2  ->  move the top 2 cards of column 7 onto column 3
"#
        );
    }
}
