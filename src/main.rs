use std::error::Error;
use std::fmt::{self, Display, Formatter};

use basic_collections::collections::contiguous::Vector;
use basic_collections::collections::hash::HashTable;
use log::info;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AccountKey {
    name: String,
    bank: u32,
    branch: u32,
    number: u32,
}

impl Display for AccountKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "K{{{},{},{},{}}}", self.name, self.bank, self.branch, self.number)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Account {
    name: String,
    bank: u32,
    branch: u32,
    number: u32,
    balance: f32,
}

impl Account {
    fn new(name: &str, bank: u32, branch: u32, number: u32, balance: f32) -> Account {
        Account {
            name: name.into(),
            bank,
            branch,
            number,
            balance,
        }
    }

    fn key(&self) -> AccountKey {
        AccountKey {
            name: self.name.clone(),
            bank: self.bank,
            branch: self.branch,
            number: self.number,
        }
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ Client: <{}> Bank: <{}> Branch: <{}> Number: <{}> Balance: <{}> ]",
            self.name, self.bank, self.branch, self.number, self.balance
        )
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    hash_table_demo()?;
    vector_demo()?;

    Ok(())
}

fn hash_table_demo() -> Result<(), Box<dyn Error>> {
    let mut accounts = Vector::from([
        Account::new("Alex Bastos", 1, 1668, 54321, 1500.0),
        Account::new("Aline Souza", 1, 1668, 45794, 530.0),
        Account::new("Cristiano Ronaldo", 13, 557, 87629, 150000.0),
        Account::new("Jose Lima", 18, 331, 1231, 850.0),
        Account::new("Saulo Cunha", 116, 666, 1, 5490.0),
        Account::new("Lima Junior", 12, 123, 5671, 150.0),
        Account::new("Carlito Pardo", 28, 506, 9816, 50.0),
        Account::new("Januario Medeiros", 17, 324, 7777, 4850.0),
    ]);

    println!(">>> Accounts:");
    for account in &accounts {
        println!("{account}");
    }

    let mut table = HashTable::with_size(4);
    for account in &accounts {
        table.insert(account.key(), account.clone());
        println!(">>> Inserted \"{}\", table now:\n{table}", account.name);

        let mut retrieved = Account::default();
        assert!(table.retrieve(&account.key(), &mut retrieved));
        assert_eq!(&retrieved, account);
    }
    info!("table holds {} accounts in {} buckets", table.len(), table.bucket_count());

    let star = &accounts[2];
    println!("\n>>> Retrieving \"{}\":\n{}", star.name, table.at(&star.key())?);

    println!("\n>>> Removing \"{}\"", star.name);
    assert!(table.erase(&star.key()));
    println!("{table}");
    assert!(!table.contains(&star.key()));

    println!("\n>>> Inserting \"{}\" again", star.name);
    table.insert(star.key(), star.clone());

    accounts.at_mut(2)?.balance = 40_000_000.0;
    let star = &accounts[2];
    println!("\n>>> Updating \"{}\"", star.name);
    assert!(!table.insert(star.key(), star.clone()));
    assert_eq!(table.at(&star.key())?.balance, 40_000_000.0);
    println!("{table}");

    println!("\n>>> Clearing the table");
    table.clear();
    assert!(table.is_empty());
    println!("{table}");

    let mut small = HashTable::with_size(2);
    for account in &accounts {
        small.insert(account.key(), account.clone());
        println!(">>> Size = {}, buckets = {}", small.len(), small.bucket_count());
    }

    Ok(())
}

fn vector_demo() -> Result<(), Box<dyn Error>> {
    let mut vec = Vector::from([1, 2, 3, 4, 5]);
    println!("\n>>> Vector: {vec}");

    vec.push_back(6);
    println!(">>> After push_back(6): {vec}");

    let pos = vec.insert(vec.begin() + 2, 99)?;
    println!(">>> After insert at {}: {vec}", pos.offset());

    let next = vec.erase_range(vec.begin(), vec.begin() + 2)?;
    println!(">>> After erasing the first two: {vec}, next = {}", vec.get_at(next)?);

    let stale = vec.begin();
    vec.shrink_to_fit();
    match vec.insert(stale, 0) {
        Ok(_) => println!(">>> Inserted through an old position"),
        Err(e) => println!(">>> Rejected an old position: {e}"),
    }

    let mut it = vec.begin();
    while it < vec.end() {
        print!("{} ", vec.get_at(it.post_inc())?);
    }
    println!("(distance {})", vec.end() - vec.begin());

    while let Ok(value) = vec.pop_back() {
        print!("{value} ");
    }
    println!("\n>>> Emptied: {vec}");

    if let Err(e) = vec.pop_back() {
        println!(">>> {e}");
    }

    Ok(())
}
