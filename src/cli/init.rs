use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path};

pub struct InitArgs {
    pub gains: Option<String>,
    pub sales: Option<String>,
    pub output: Option<String>,
    pub currency: Option<String>,
    pub workbook_dir: Option<String>,
    pub sheet: Option<String>,
}

pub fn run(args: InitArgs) -> Result<()> {
    let mut settings = load_settings();

    if let Some(v) = args.gains {
        settings.gains_file = v;
    }
    if let Some(v) = args.sales {
        settings.sales_file = v;
    }
    if let Some(v) = args.output {
        settings.report_file = v;
    }
    if let Some(v) = args.currency {
        settings.currency_symbol = v;
    }
    if let Some(v) = args.workbook_dir {
        settings.workbook_dir = v;
    }
    if let Some(v) = args.sheet {
        settings.sheet_name = v;
    }

    save_settings(&settings)?;
    println!("Saved settings to {}", settings_path().display());
    Ok(())
}
