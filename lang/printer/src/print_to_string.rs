use crate::PrintCfg;

use super::Print;
use super::PrintExt;

pub trait PrintToString {
    fn print_to_string(&self, cfg: Option<&PrintCfg>) -> String;
}

impl<T: Print> PrintToString for T {
    fn print_to_string(&self, cfg: Option<&PrintCfg>) -> String {
        let mut buf = Vec::new();
        let def = PrintCfg::default();
        let cfg = cfg.unwrap_or(&def);
        <T as PrintExt>::print(self, cfg, &mut buf).expect("Failed to print to string");
        String::from_utf8(buf).expect("Failed to print to string")
    }
}
