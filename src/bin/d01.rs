use aoc2024::{d01::Solution, open_utf8_file, Args, Parser};

fn main() {
    let args: Args = Args::parse();
    let input_file_path: String = args.input_file_path(1_u8);

    if let Err(err) =
        // SAFETY: This operation is unsafe, we're just hoping nobody else touches the file while
        // this program is executing
        unsafe {
            open_utf8_file(&input_file_path, |input: &str| {
                match Solution::try_from(input) {
                    Ok(solution) => {
                        println!("Part 1: {}", solution.total_distance());
                        println!("Part 2: {}", solution.similarity_score());
                    }
                    Err(error) => eprintln!("Failed to parse input:\n{error:#?}"),
                }
            })
        }
    {
        eprintln!(
            "Encountered error {} when opening file \"{}\"",
            err, input_file_path
        );
    }
}
