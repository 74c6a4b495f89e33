//! Terminal rendering with brackets coloured by nesting depth.

use colored::*;
use std::io::{self, Write};

use super::sexp::{write_list, HeapSexp};


fn paren_color(depth: usize) -> (u8, u8, u8) {
    match depth % 6 {
        0 => (0, 255, 204),
        1 => (204, 51, 0),
        2 => (153, 255, 102),
        3 => (153, 102, 255),
        4 => (255, 255, 102),
        _ => (255, 179, 179),
    }
}

pub fn write_colored<W: Write>(w: &mut W, value: Option<&HeapSexp>) -> io::Result<()> {
    write_list(
        w,
        value.map(|v| &**v),
        0,
        true,
        &mut |writer, primitive, _depth| write!(writer, "{}", primitive),
        &mut |writer, paren, depth| {
            let (r, g, b) = paren_color(depth);
            write!(writer, "{}", paren.truecolor(r, g, b))
        },
    )
}

pub fn print_colored(value: Option<&HeapSexp>) {
    let stdout = io::stdout();
    let mut writer = io::BufWriter::new(stdout.lock());
    if let Err(err) = write_colored(&mut writer, value) {
        println!("print_colored error: {:?}", err);
    }
}
