//! Tabular environments (`\begin{matrix}` …) and `\substack`.

use std::mem;

use crate::builder::arg::TextArgBuilder;
use crate::builder::row::RowBuilder;
use crate::lexer::TokenKind;
use crate::stream::TokenStream;

/// Accumulates `<mtr>`/`<mtd>` structure from `&`-separated cells and
/// `\\`-separated rows. Rows are wrapped retroactively: cells pile up in
/// the buffer and the `<mtr>` is inserted at the recorded row start when
/// the row separator arrives.
pub(crate) struct TableBuilder {
    out: String,
    row_begin: usize,
    cell: RowBuilder,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            row_begin: 0,
            cell: RowBuilder::with_node("mtd"),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        let top = tokens.top();
        match (top.kind, top.lexeme) {
            (TokenKind::Sign, "&") => {
                let cell = self.reset_cell();
                self.out.push_str(&cell);
                tokens.next();
            }
            (TokenKind::Sign, "\\") => {
                let cell = self.reset_cell();
                self.out.push_str(&cell);
                self.out.insert_str(self.row_begin, "<mtr>");
                self.out.push_str("</mtr>");
                self.row_begin = self.out.len();
                tokens.next();
            }
            _ => self.cell.add(tokens),
        }
    }

    pub fn take(mut self) -> String {
        // The pending cell joins the final row only when it has content, so
        // a trailing row separator does not produce an empty row.
        let cell = self.cell.take();
        if cell != "<mtd></mtd>" {
            self.out.push_str(&cell);
        }
        if self.out.len() > self.row_begin {
            self.out.insert_str(self.row_begin, "<mtr>");
            self.out.push_str("</mtr>");
        }
        format!("<mtable>{}</mtable>", self.out)
    }

    fn reset_cell(&mut self) -> String {
        mem::replace(&mut self.cell, RowBuilder::with_node("mtd")).take()
    }
}

/// Drives a [`TableBuilder`] from `\begin{NAME}` to the matching
/// `\end{NAME}` and picks the fence the environment name implies.
pub(crate) struct BeginEnvBuilder {
    name: String,
    table: TableBuilder,
}

impl BeginEnvBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            table: TableBuilder::new(),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        // Optional column layout argument; the hints are discarded.
        if tokens.top().kind == TokenKind::StartGroup && tokens.top().lexeme == "{" {
            let mut columns = TextArgBuilder::new();
            columns.add(tokens);
            drop(columns);
        }
        while !tokens.empty() && tokens.top().kind != TokenKind::EndEnv {
            self.table.add(tokens);
        }
        // Consume the `\end{NAME}`; a missing one closes implicitly.
        tokens.next();
    }

    pub fn take(self) -> String {
        let table = self.table.take();
        match self.name.as_str() {
            "pmatrix" => fenced("(", ")", &table),
            "bmatrix" => fenced("[", "]", &table),
            "Bmatrix" => fenced("{", "}", &table),
            "vmatrix" => fenced("|", "|", &table),
            "Vmatrix" => fenced("‖", "‖", &table),
            // `matrix` and unrecognized environments render unfenced.
            _ => table,
        }
    }
}

/// `\substack{…}`: a table fed from one braced argument.
pub(crate) struct ArgTableBuilder {
    table: TableBuilder,
}

impl ArgTableBuilder {
    pub fn new() -> Self {
        Self {
            table: TableBuilder::new(),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        let top = tokens.top();
        if top.kind == TokenKind::StartGroup && top.lexeme == "{" {
            let mut depth = 0usize;
            while !tokens.empty() {
                let closing = match tokens.top().kind {
                    TokenKind::StartGroup => {
                        depth += 1;
                        false
                    }
                    TokenKind::EndGroup => {
                        depth = depth.saturating_sub(1);
                        depth == 0
                    }
                    _ => false,
                };
                self.table.add(tokens);
                if closing {
                    break;
                }
            }
        } else {
            self.table.add(tokens);
        }
    }

    pub fn take(self) -> String {
        self.table.take()
    }
}

fn fenced(open: &str, close: &str, table: &str) -> String {
    format!("<mfenced open='{open}' close='{close}'>{table}</mfenced>")
}

#[cfg(test)]
mod tests {
    use super::{ArgTableBuilder, BeginEnvBuilder, TableBuilder};
    use crate::lexer::Lexer;
    use crate::stream::TokenStream;

    fn stream(input: &str) -> TokenStream<'_> {
        TokenStream::new(Lexer::new(input))
    }

    fn drive_table(input: &str) -> String {
        let mut tokens = stream(input);
        let mut table = TableBuilder::new();
        while !tokens.empty() {
            table.add(&mut tokens);
        }
        table.take()
    }

    #[test]
    fn cells_and_rows() {
        assert_eq!(
            drive_table(r"a & b \\ c & d"),
            "<mtable><mtr><mtd><mi>a</mi></mtd><mtd><mi>b</mi></mtd></mtr>\
             <mtr><mtd><mi>c</mi></mtd><mtd><mi>d</mi></mtd></mtr></mtable>"
        );
    }

    #[test]
    fn single_row_without_separator() {
        assert_eq!(
            drive_table("a & b"),
            "<mtable><mtr><mtd><mi>a</mi></mtd><mtd><mi>b</mi></mtd></mtr></mtable>"
        );
    }

    #[test]
    fn trailing_row_separator_adds_no_row() {
        assert_eq!(
            drive_table(r"a \\"),
            "<mtable><mtr><mtd><mi>a</mi></mtd></mtr></mtable>"
        );
    }

    #[test]
    fn empty_table() {
        assert_eq!(drive_table(""), "<mtable></mtable>");
    }

    #[test]
    fn environment_fence() {
        let mut tokens = stream(r"a & b \\ c & d\end{pmatrix}x");
        let mut env = BeginEnvBuilder::new("pmatrix");
        env.add(&mut tokens);
        assert_eq!(
            env.take(),
            "<mfenced open='(' close=')'><mtable>\
             <mtr><mtd><mi>a</mi></mtd><mtd><mi>b</mi></mtd></mtr>\
             <mtr><mtd><mi>c</mi></mtd><mtd><mi>d</mi></mtd></mtr>\
             </mtable></mfenced>"
        );
        assert_eq!(tokens.top().lexeme, "x");
    }

    #[test]
    fn plain_matrix_is_unfenced() {
        let mut tokens = stream(r"a\end{matrix}");
        let mut env = BeginEnvBuilder::new("matrix");
        env.add(&mut tokens);
        assert_eq!(
            env.take(),
            "<mtable><mtr><mtd><mi>a</mi></mtd></mtr></mtable>"
        );
    }

    #[test]
    fn substack_argument() {
        let mut tokens = stream(r"{a \\ b}x");
        let mut substack = ArgTableBuilder::new();
        substack.add(&mut tokens);
        assert_eq!(
            substack.take(),
            "<mtable><mtr><mtd><mi>a</mi></mtd></mtr><mtr><mtd><mi>b</mi></mtd></mtr></mtable>"
        );
        assert_eq!(tokens.top().lexeme, "x");
    }
}
