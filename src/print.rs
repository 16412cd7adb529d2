use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::display::{pretty_name, DisplayPercent};
use crate::odds::Distribution;

/// Tabulates the field by descending win probability.
pub fn tabulate(dist: &Distribution) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(24)).with(HAlign::Left)),
            Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(16))
                    .with(HAlign::Centred),
            ),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Contestant".into(), "Probability (%)".into()],
        ));

    for entry in dist.ranked() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                pretty_name(&entry.name).into(),
                DisplayPercent(entry.prob).to_string().into(),
            ],
        ));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::smackoff_30;
    use crate::odds::convert;
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    #[test]
    fn tabulate_ranks_descending() {
        let dist = convert(&smackoff_30()).unwrap();
        let table = tabulate(&dist);
        assert_eq!(36, table.num_rows());

        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("Probability (%)"));

        let favourite = rendered.find("Brad in Corona").unwrap();
        let runner_up = rendered.find("Mark in Boston").unwrap();
        let outsider = rendered.find("Dre in Providence").unwrap();
        assert!(favourite < runner_up);
        assert!(runner_up < outsider);

        let percent = DisplayPercent(dist.get("Brad_in_Corona").unwrap()).to_string();
        assert!(rendered.contains(&percent));
    }

    #[test]
    fn tabulate_keeps_declaration_order_on_ties() {
        let dist = convert(&smackoff_30()).unwrap();
        let rendered = Console::default().render(&tabulate(&dist)).to_string();
        let vic = rendered.find("Vic in NoCal").unwrap();
        let rick = rendered.find("Rick in Buffalo").unwrap();
        assert!(vic < rick);
    }
}
