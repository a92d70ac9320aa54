use console::Style;
use fitswap_core::selectors::{can_checkout, can_swap, cart_summary};
use fitswap_core::{format_price, ImageRef, PhotoSlot, SwapPhase, ViewState};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    ok: Style,
    disabled: Style,
    error: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().magenta().bold(),
            header: Style::new().magenta().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            ok: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            error: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_session_summary(state: &ViewState, currency: &str) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Outfit Session"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();

    // Photos
    println!("  {}", s.header.apply_to("Photos"));
    for &slot in PhotoSlot::ALL {
        print_photo(&s, &slot.to_string(), state.photo(slot));
    }
    print_photo(&s, "Result", state.result_photo());
    println!();

    // Swap
    println!("  {}", s.header.apply_to("Swap"));
    let phase = match state.phase() {
        SwapPhase::Failed { .. } => s.error.apply_to(state.phase().to_string()),
        SwapPhase::Ready => s.ok.apply_to(state.phase().to_string()),
        _ => s.value.apply_to(state.phase().to_string()),
    };
    println!("    {:<16}{}", s.label.apply_to("State"), phase);
    println!(
        "    {:<16}{}",
        s.label.apply_to("Can generate"),
        yes_no(&s, can_swap(state))
    );
    println!();

    // Cart
    let cart = cart_summary(state);
    if cart.lines.is_empty() {
        println!(
            "  {:<18}{}",
            s.header.apply_to("Cart"),
            s.disabled.apply_to("empty")
        );
    } else {
        println!("  {}", s.header.apply_to("Cart"));
        for line in &cart.lines {
            println!(
                "    {:<32}{:<16}{}",
                s.value.apply_to(&line.name),
                s.label.apply_to(&line.spec),
                format_price(currency, line.price)
            );
        }
    }
    println!(
        "    {:<16}{}",
        s.label.apply_to("Items"),
        s.value.apply_to(cart.count)
    );
    println!(
        "    {:<16}{}",
        s.label.apply_to("Total"),
        s.value.apply_to(format_price(currency, cart.total))
    );
    println!(
        "    {:<16}{}",
        s.label.apply_to("Checkout"),
        yes_no(&s, can_checkout(state))
    );
    println!();
}

fn print_photo(s: &Styles, label: &str, image: Option<&ImageRef>) {
    match image {
        Some(image) => println!(
            "    {:<16}{}",
            s.label.apply_to(label),
            s.path.apply_to(image)
        ),
        None => println!(
            "    {:<16}{}",
            s.label.apply_to(label),
            s.disabled.apply_to("empty")
        ),
    }
}

fn yes_no(s: &Styles, value: bool) -> console::StyledObject<&'static str> {
    if value {
        s.ok.apply_to("yes")
    } else {
        s.disabled.apply_to("no")
    }
}
