use super::ui;
use crate::core::compare::CountryGroups;
use crate::core::ComparisonService;
use anyhow::Result;
use comfy_table::Cell;

/// Which side of the comparison to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryList {
    Residence,
    Target,
}

pub fn display_groups(groups: &CountryGroups) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Continent"),
        ui::header_cell("Countries"),
    ]);
    for (continent, names) in groups {
        table.add_row(vec![Cell::new(continent.label()), Cell::new(names.join(", "))]);
    }
    table.to_string()
}

pub async fn run(service: &ComparisonService, list: CountryList) -> Result<()> {
    let groups = match list {
        CountryList::Residence => service.residence_countries().await?,
        CountryList::Target => service.target_countries(),
    };
    println!("{}", display_groups(&groups));
    Ok(())
}
