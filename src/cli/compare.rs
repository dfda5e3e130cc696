use super::ui;
use crate::core::{ComparisonOutcome, ComparisonRequest, ComparisonService};
use anyhow::Result;
use comfy_table::Cell;

impl ComparisonOutcome {
    pub fn display_breakdown(&self) -> String {
        let n = &self.normalized;
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Step"), ui::header_cell("Value")]);
        table.add_row(vec![
            Cell::new(format!("Net worth ({})", n.input_currency)),
            ui::amount_cell(n.original_net_worth),
        ]);
        table.add_row(vec![
            Cell::new(format!("Rate {} -> {}", n.input_currency, n.official_currency)),
            Cell::new(format!("{:.6}", n.exchange_rate)),
        ]);
        table.add_row(vec![
            Cell::new(format!("Converted ({})", n.official_currency)),
            ui::amount_cell(n.converted_net_worth_in_official),
        ]);
        table.add_row(vec![
            Cell::new("Inflation adjusted"),
            ui::amount_cell(n.deflated_net_worth),
        ]);

        let mut output = format!(
            "Residence: {}\n\n",
            ui::style_text(&self.residence_code, ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{}: {}",
            ui::style_text("International dollars", ui::StyleType::TotalLabel),
            ui::style_text(
                &format!("{:.2}", n.international_net_worth),
                ui::StyleType::TotalValue
            )
        ));
        output
    }

    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Country"),
            ui::header_cell("Code"),
            ui::header_cell("Percentile"),
            ui::header_cell("Threshold"),
        ]);

        for result in &self.results {
            table.add_row(vec![
                Cell::new(&result.target_country),
                Cell::new(&result.target_code),
                ui::percentile_cell(result.wealth_percentile),
                ui::amount_cell(result.wealth_threshold),
            ]);
        }

        let mut output = table.to_string();
        if !self.skipped.is_empty() {
            let codes: Vec<&str> = self.skipped.iter().map(|s| s.code.as_str()).collect();
            output.push_str(&format!(
                "\n{}",
                ui::style_text(
                    &format!("Skipped: {}", codes.join(", ")),
                    ui::StyleType::Subtle
                )
            ));
        }
        output
    }
}

pub async fn run(service: &ComparisonService, request: &ComparisonRequest) -> Result<()> {
    let outcome = service.compare(request).await?;
    println!("{}", outcome.display_breakdown());
    ui::print_separator();
    println!("{}", outcome.display_as_table());
    Ok(())
}
