use anyhow::Result;
use dialoguer::Input;

pub const KNOWN_DATASETS: [&str; 3] = ["data1953.csv", "data2008.csv", "dataBoth.csv"];

pub fn input_path() -> Result<String> {
    let path = Input::<String>::new()
        .with_prompt(format!(
            "Please enter the name of the file containing the dataset you wish to use ({})",
            KNOWN_DATASETS.join(", ")
        ))
        .interact_text()?;
    Ok(path)
}

// Range checking happens when the clustering runs, against the loaded dataset
pub fn num_clusters() -> Result<usize> {
    let num_clusters = Input::<usize>::new()
        .with_prompt("Please enter the number of clusters you wish to create")
        .interact_text()?;
    Ok(num_clusters)
}
