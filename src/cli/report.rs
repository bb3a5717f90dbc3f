use std::io::Write;
use std::path::{Path, PathBuf};

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::{Result, VentasError};
use crate::fmt::money;
use crate::gains::load_gains;
use crate::importer::read_sales;
use crate::reports::{summarize, SalesSummary};
use crate::settings::{load_settings, shellexpand_path};

const RULE: &str = "--------------------------------------------------";

pub struct ReportPaths {
    pub gains: PathBuf,
    pub sales: PathBuf,
    pub output: PathBuf,
}

// ---------------------------------------------------------------------------
// Pure formatting functions (summary -> String)
// ---------------------------------------------------------------------------

pub fn format_report(summary: &SalesSummary, symbol: &str) -> String {
    let mut out = String::from("Resumen Mensual Actualizado (Precio Total y Ganancia Total)\n\n");

    for (month, totals) in summary.months.iter() {
        out.push_str(&format!("*   **{} - {}:**\n", month.year, month.month_name()));
        out.push_str(&format!("    *   Suma de Precios: {}\n", money(totals.total_price, symbol)));
        out.push_str(&format!("    *   Suma de Ganancias: {}\n\n", money(totals.total_gain, symbol)));
    }

    out.push_str(RULE);
    out.push('\n');
    out.push_str("Resumen Total de Todos los Meses\n\n");
    out.push_str(&format!(
        "*   **Suma Total de Precios:** {}\n",
        money(summary.grand.total_price, symbol)
    ));
    out.push_str(&format!(
        "*   **Suma Total de Ganancias:** {}\n",
        money(summary.grand.total_gain, symbol)
    ));
    out.push_str(RULE);
    out.push('\n');
    out
}

pub fn format_table(summary: &SalesSummary, symbol: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Month", "Revenue", "Profit"]);
    for (month, totals) in summary.months.iter() {
        table.add_row(vec![
            Cell::new(format!("{} {}", month.month_name(), month.year)),
            Cell::new(money(totals.total_price, symbol)),
            Cell::new(money(totals.total_gain, symbol)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(money(summary.grand.total_price, symbol)),
        Cell::new(money(summary.grand.total_gain, symbol).green()),
    ]);
    table
}

// ---------------------------------------------------------------------------
// Report sink
// ---------------------------------------------------------------------------

/// Write through a temp file in the destination directory, then rename over
/// `path`. A failed write leaves any previous report as it was.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    let wrap = |source: std::io::Error| VentasError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(wrap)?;
    tmp.write_all(content.as_bytes()).map_err(wrap)?;
    tmp.persist(path).map_err(|e| wrap(e.error))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Load both inputs, aggregate, and write the report. Missing inputs abort
/// before anything is written.
pub fn build(paths: &ReportPaths, symbol: &str) -> Result<(SalesSummary, usize)> {
    let gains = load_gains(&paths.gains)?;
    let import = read_sales(&paths.sales)?;
    let skipped = import.skipped;
    let summary = summarize(import.records, Some(&gains));
    log::info!(
        "{} rows counted, {} skipped, {} months",
        summary.rows_counted,
        skipped,
        summary.months.len()
    );
    write_report(&paths.output, &format_report(&summary, symbol))?;
    Ok((summary, skipped))
}

pub fn run(gains: Option<String>, sales: Option<String>, output: Option<String>) -> Result<()> {
    let settings = load_settings();
    let paths = ReportPaths {
        gains: shellexpand_path(gains.as_deref().unwrap_or(&settings.gains_file)),
        sales: shellexpand_path(sales.as_deref().unwrap_or(&settings.sales_file)),
        output: shellexpand_path(output.as_deref().unwrap_or(&settings.report_file)),
    };
    let symbol = &settings.currency_symbol;

    let (summary, skipped) = build(&paths, symbol)?;

    println!("Report saved successfully to {}", paths.output.display());
    println!("{} rows counted, {} skipped", summary.rows_counted, skipped);
    if !summary.months.is_empty() {
        println!("{}", format_table(&summary, symbol));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gains::parse_gains;
    use crate::importer::parse_sales;

    fn summary_from(csv: &str, gains: &str) -> SalesSummary {
        let table = parse_gains(gains);
        summarize(parse_sales(csv).records, Some(&table))
    }

    fn paths_in(dir: &Path) -> ReportPaths {
        ReportPaths {
            gains: dir.join("lista.txt"),
            sales: dir.join("ventas.csv"),
            output: dir.join("reporte_de_ventas.txt"),
        }
    }

    #[test]
    fn test_format_report_layout() {
        let summary = summary_from(
            "\
Producto,Cantidad,Precio,Fecha,Ganancia
Bolsa A,2,\"C$1,500.00\",2024-02-10,
Bolsa A,1,10.00,2023-12-01,2.50
Bolsa B,1,0,2024-02-11,
",
            "Bolsa A  1:5,2:9",
        );
        let expected = "\
Resumen Mensual Actualizado (Precio Total y Ganancia Total)

*   **2023 - Diciembre:**
    *   Suma de Precios: C$10.00
    *   Suma de Ganancias: C$2.50

*   **2024 - Febrero:**
    *   Suma de Precios: C$1,500.00
    *   Suma de Ganancias: C$9.00

--------------------------------------------------
Resumen Total de Todos los Meses

*   **Suma Total de Precios:** C$1,510.00
*   **Suma Total de Ganancias:** C$11.50
--------------------------------------------------
";
        assert_eq!(format_report(&summary, "C$"), expected);
    }

    #[test]
    fn test_format_report_empty() {
        let summary = summary_from("Producto,Cantidad,Precio,Fecha,Ganancia\n", "");
        let text = format_report(&summary, "C$");
        assert!(text.starts_with("Resumen Mensual Actualizado (Precio Total y Ganancia Total)\n\n--"));
        assert!(text.contains("*   **Suma Total de Precios:** C$0.00\n"));
    }

    #[test]
    fn test_months_render_in_order() {
        let summary = summary_from(
            "\
h1,h2,h3,h4,h5
A,1,1,2024-02-01,
A,1,1,2023-12-01,
A,1,1,2024-01-01,
",
            "",
        );
        let text = format_report(&summary, "C$");
        let dec = text.find("2023 - Diciembre").unwrap();
        let jan = text.find("2024 - Enero").unwrap();
        let feb = text.find("2024 - Febrero").unwrap();
        assert!(dec < jan && jan < feb);
    }

    #[test]
    fn test_build_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.gains, "Bolsa A  1:5,2:9\n").unwrap();
        std::fs::write(
            &paths.sales,
            "Producto,Cantidad,Precio,Fecha,Ganancia\nBolsa A,2,10.00,2024-01-15,\nmala,fila\n",
        )
        .unwrap();
        let (summary, skipped) = build(&paths, "C$").unwrap();
        assert_eq!(summary.grand.total_gain, 9.0);
        assert_eq!(skipped, 1);
        let text = std::fs::read_to_string(&paths.output).unwrap();
        assert!(text.contains("*   **2024 - Enero:**\n"));
        assert!(text.contains("Suma de Ganancias: C$9.00"));
    }

    #[test]
    fn test_missing_sales_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.gains, "Bolsa A  1:5\n").unwrap();
        let err = build(&paths, "C$").unwrap_err();
        assert!(matches!(err, VentasError::FileNotFound { what: "Sales file", .. }));
        assert!(!paths.output.exists());
    }

    #[test]
    fn test_missing_gains_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.sales, "h\nBolsa A,1,1,2024-01-01,\n").unwrap();
        let err = build(&paths, "C$").unwrap_err();
        assert!(matches!(err, VentasError::FileNotFound { what: "Gains list file", .. }));
        assert!(!paths.output.exists());
    }

    #[test]
    fn test_write_report_replaces_previous() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reporte.txt");
        std::fs::write(&path, "viejo").unwrap();
        write_report(&path, "nuevo").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "nuevo");
    }

    #[test]
    fn test_write_report_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("reporte.txt");
        let err = write_report(&path, "x").unwrap_err();
        assert!(matches!(err, VentasError::ReportWrite { .. }));
    }
}
