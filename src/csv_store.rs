use csv::ReaderBuilder;
use std::path::Path;

use crate::domain::models::Investment;
use crate::domain::repository::RepoResult;

// Columns: id,name,user_id,shares,cost_basis_per_share,current_price,purchase_date
pub trait InvestmentStore {
    fn read_investments(&self, path: &Path) -> RepoResult<Vec<Investment>>;
}

pub struct FileCsvStore;

impl InvestmentStore for FileCsvStore {
    fn read_investments(&self, path: &Path) -> RepoResult<Vec<Investment>> {
        let mut rdr = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .has_headers(true)
            .from_path(path)?;
        let mut investments = Vec::new();
        for result in rdr.deserialize() {
            let record: Investment = result?;
            investments.push(record);
        }
        Ok(investments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::RepoError;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_investments_happy_path() {
        let file = write_csv(
            "id,name,user_id,shares,cost_basis_per_share,current_price,purchase_date\n\
             1, Apple ,user1,100,150.00,175.50,2024-01-15T00:00:00Z\n\
             9,Nvidia,user3,12.5,410.10,880.00,2023-03-01T09:30:00Z\n",
        );
        let rows = FileCsvStore.read_investments(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Apple");
        assert_eq!(rows[0].current_price, dec!(175.50));
        assert_eq!(rows[1].shares, dec!(12.5));
        assert_eq!(rows[1].user_id, "user3");
    }

    #[test]
    fn test_read_bundled_sample_seed() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/investments.csv");
        let rows = FileCsvStore.read_investments(&path).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Microsoft", "Google", "Tesla", "Meta"]);
        assert_eq!(rows[1].current_price, dec!(285.75));
        assert_eq!(rows[3].user_id, "user2");

        let repo = crate::infra::memory::repo::InMemoryRepo::new(rows).unwrap();
        assert_eq!(repo.count(), 5);
    }

    #[test]
    fn test_read_investments_bad_decimal() {
        let file = write_csv(
            "id,name,user_id,shares,cost_basis_per_share,current_price,purchase_date\n\
             1,Apple,user1,lots,150.00,175.50,2024-01-15T00:00:00Z\n",
        );
        assert!(matches!(FileCsvStore.read_investments(file.path()), Err(RepoError::Csv(_))));
    }

    #[test]
    fn test_read_investments_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        assert!(FileCsvStore.read_investments(&missing).is_err());
    }
}
