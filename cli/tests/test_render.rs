//! Integration tests for table rendering.
#[cfg(test)]
mod tests {
    use ca_cli::{
        commands::dashboard::delete_prompt,
        render::{content_table, row_cells, LABEL_NOT_PUBLISHED},
    };
    use chrono::{TimeZone, Utc};
    use culture_archive_shared::{merge_feeds, Article, Photograph};

    fn feed() -> Vec<culture_archive_shared::ContentItem> {
        let day = |d: u32| {
            Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0)
                .single()
                .expect("valid date")
        };
        merge_feeds(
            vec![Article {
                id: "a1".to_string(),
                title: "廟會".to_string(),
                author: "Lin".to_string(),
                slug: "temple-fair".to_string(),
                published_at: None,
                created_at: day(1),
                updated_at: day(2),
            }],
            vec![Photograph {
                id: "p1".to_string(),
                title: "港口".to_string(),
                author: "Chen".to_string(),
                description: "Harbour at dawn".to_string(),
                photo_date: day(5),
                created_at: day(1),
                updated_at: day(9),
            }],
        )
    }

    #[test]
    fn rows_use_kind_specific_columns() {
        let items = feed();
        let photo = row_cells(&items[0]);
        assert_eq!(photo[0], "光影故事");
        assert_eq!(photo[2], "Harbour at dawn");
        assert_eq!(photo[4], "2024/03/05");
        assert_eq!(photo[5], "2024/03/09");

        let article = row_cells(&items[1]);
        assert_eq!(article[0], "觀點文章");
        assert_eq!(article[2], "temple-fair");
        assert_eq!(article[4], LABEL_NOT_PUBLISHED);
    }

    #[test]
    fn table_has_header_and_one_line_per_item() {
        let table = content_table(&feed());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("類別"));
        assert!(lines[1].contains("港口"));
        assert!(lines[2].contains("廟會"));
    }

    #[test]
    fn delete_prompt_names_the_item() {
        let items = feed();
        assert_eq!(delete_prompt(&items[1]), "確定要刪除文章「廟會」嗎？此操作無法復原。");
        assert!(delete_prompt(&items[0]).contains("照片「港口」"));
    }
}
