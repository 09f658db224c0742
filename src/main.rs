use oasisdex_rs::{
    EthRpc, MarketConfig, OasisGateway, OasisMarket, QuoteError, TokenRegistry, Wad,
};

fn print_usage(bin: &str) {
    eprintln!("Usage:");
    eprintln!("  {} --pair <FROM/TO> --amount <N> --endpoint <URL>", bin);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --help        -h    Show this message");
    eprintln!("  --pair        -p    Token pair (example W-ETH/DAI)");
    eprintln!("  --amount      -a    Amount of needed token");
    eprintln!("  --endpoint    -e    Ethereum JSON-RPC endpoint");
    eprintln!("  --order-limit -O    Offer output limit [default 10]");
    eprintln!("  --takes-limit -T    Takes output limit [default 10]");
    eprintln!("  --max-order   -M    Max offers to walk [default 1000]");
    eprintln!("  --debug             Print full error chains");
}

fn required(value: Option<String>, flag: &str) -> String {
    match value {
        Some(v) => v,
        None => {
            eprintln!("{} parameter is required", flag);
            std::process::exit(1);
        }
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> T {
    match value.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("{} expects a number, got '{}'", flag, value);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let raw_args: Vec<String> = std::env::args().collect();

    let mut pair_text: Option<String> = None;
    let mut amount_text: Option<String> = None;
    let mut endpoint: Option<String> = None;
    let mut config = MarketConfig::default();
    let mut debug = false;

    let mut i = 1;
    while i < raw_args.len() {
        let flag = raw_args[i].as_str();
        match flag {
            "-h" | "--help" => {
                print_usage(&raw_args[0]);
                std::process::exit(0);
            }
            "--debug" => debug = true,
            "-p" | "--pair" | "-a" | "--amount" | "-e" | "--endpoint" | "-O" | "--order-limit"
            | "-T" | "--takes-limit" | "-M" | "--max-order" => {
                i += 1;
                if i >= raw_args.len() {
                    eprintln!("{} requires a value", flag);
                    std::process::exit(1);
                }
                let value = raw_args[i].clone();
                match flag {
                    "-p" | "--pair" => pair_text = Some(value),
                    "-a" | "--amount" => amount_text = Some(value),
                    "-e" | "--endpoint" => endpoint = Some(value),
                    "-O" | "--order-limit" => config.offers_limit = parse_number(&value, flag),
                    "-T" | "--takes-limit" => config.takes_limit = parse_number(&value, flag),
                    "-M" | "--max-order" => config.max_offer_count = parse_number(&value, flag),
                    _ => unreachable!(),
                }
            }
            other => {
                eprintln!("Unknown option: '{}'", other);
                print_usage(&raw_args[0]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if pair_text.is_none() && amount_text.is_none() && endpoint.is_none() {
        print_usage(&raw_args[0]);
        std::process::exit(1);
    }
    let pair_text = required(pair_text, "--pair");
    let amount_text = required(amount_text, "--amount");
    let endpoint = required(endpoint, "--endpoint");

    let amount = match Wad::parse(&amount_text) {
        Ok(amount) => amount,
        Err(e) => {
            eprintln!("--amount: {}", e);
            std::process::exit(1);
        }
    };

    let rpc = EthRpc::new(&endpoint);
    let market = OasisMarket::with_config(OasisGateway::new(rpc), TokenRegistry::mainnet(), config);

    if let Err(e) = run(&market, &pair_text, &amount_text, amount).await {
        if debug {
            eprintln!("Error: {:?}", e);
        } else {
            eprintln!("Error: {}", e);
            eprintln!("Use --debug for details.");
        }
        std::process::exit(1);
    }
}

async fn run(
    market: &OasisMarket<OasisGateway>,
    pair_text: &str,
    amount_text: &str,
    amount: Wad,
) -> Result<(), QuoteError> {
    let pair = market.resolve_pair(pair_text).await?;
    let quote = market.quote(&pair, amount).await?;

    if quote.price > 0.0 {
        println!("Price for pair {} is {}", pair.text, quote.price);
    } else {
        println!(
            "You can't buy {} {}. Amount too much",
            amount_text, pair.to_symbol
        );
    }
    println!("Top offers:");
    for offer in &quote.offers {
        println!("{}", offer);
    }
    println!("Last takes:");
    for take in &quote.takes {
        println!("{}", take);
    }
    Ok(())
}
