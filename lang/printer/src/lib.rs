use std::io;

mod print_to_string;
pub mod tokens;
mod types;

pub use print_to_string::*;
pub use types::*;

pub const DEFAULT_WIDTH: usize = 100;

pub trait PrintExt {
    fn print<W: io::Write>(&self, cfg: &PrintCfg, out: &mut W) -> io::Result<()>;
}

impl<T: Print> PrintExt for T {
    fn print<W: io::Write>(&self, cfg: &PrintCfg, out: &mut W) -> io::Result<()> {
        let alloc = Alloc::new();
        let doc_builder = <T as Print>::print(self, cfg, &alloc);
        doc_builder.1.render(cfg.width, out)
    }
}
