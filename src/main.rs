fn main() {
    casino_web::mount();
}
