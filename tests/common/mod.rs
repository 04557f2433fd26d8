// Shared fixtures for respmap integration tests
#![allow(dead_code)]

use indoc::indoc;

/// Primary constructor with fields copied from its parameters.
pub const PROCESS_CONTROLLER: &str = indoc! {"
    public class ProcessController(IA a, IB b, IC c)
    {
        private readonly IA _a = a;
        private readonly IB _b = b;
        private readonly IC _c = c;

        public IEnumerable<Workpiece> GetWorkpieces(string filter)
        {
            return _a.GetWorkpieces(filter);
        }
    }
"};

/// Two dependencies, each with its own dedicated method.
pub const ORDER_AND_EMAIL: &str = indoc! {"
    public class OrderController(IOrderService orderService, IEmailService emailService)
    {
        private readonly IOrderService _orderService = orderService;
        private readonly IEmailService _emailService = emailService;

        public void ProcessOrder(Order order)
        {
            _orderService.Process(order);
        }

        public void SendConfirmationEmail(Order order)
        {
            _emailService.Send(order.CustomerEmail);
        }
    }
"};

/// Same dependencies behind XML doc comments that mention the word class.
pub const ORDER_AND_EMAIL_DOCUMENTED: &str = indoc! {"
    /// <summary>
    /// Controller class for orders and their confirmation mail.
    /// </summary>
    public class OrderController(IOrderService orderService, IEmailService emailService)
    {
        private readonly IOrderService _orderService = orderService;
        private readonly IEmailService _emailService = emailService;

        /// Hands the order to the service class.
        public void ProcessOrder(Order order)
        {
            _orderService.Process(order);
        }

        public void SendConfirmationEmail(Order order)
        {
            _emailService.Send(order.CustomerEmail);
        }
    }
"};

/// Same dependencies wired through a conventional constructor.
pub const ORDER_AND_EMAIL_CONVENTIONAL: &str = indoc! {"
    public class OrderController : ControllerBase
    {
        private readonly IOrderService _orderService = default!;
        private readonly IEmailService _emailService = default!;

        public OrderController(IOrderService orderService, IEmailService emailService)
            : base()
        {
            _orderService = orderService;
            _emailService = emailService;
        }

        public void ProcessOrder(Order order) => _orderService.Process(order);

        public void SendConfirmationEmail(Order order) => _emailService.Send(order.CustomerEmail);
    }
"};

/// Two dependencies always used together.
pub const ALWAYS_TOGETHER: &str = indoc! {"
    public class ReportBuilder(IRepository repository, IRenderer renderer)
    {
        public string Build(int id)
        {
            var data = repository.Load(id);
            return renderer.Render(data);
        }

        public string Preview(int id) => renderer.Render(repository.Load(id)).Substring(0, 80);
    }
"};

/// Dependency known only through a readonly field.
pub const FIELD_ONLY: &str = indoc! {"
    public class Clock
    {
        private readonly ITimeSource _time = new SystemTimeSource();

        public DateTime Now() => _time.UtcNow;
    }
"};

/// No constructor and no readonly field.
pub const NO_DEPENDENCIES: &str = indoc! {"
    public class Calculator
    {
        public int Add(int a, int b) { return a + b; }
        public int Twice(int value) => value * 2;
    }
"};

/// Framework services mixed with a domain dependency.
pub const WITH_FRAMEWORK_SERVICES: &str = indoc! {"
    public class InvoiceService(ILogger<InvoiceService> logger, IInvoiceRepository invoices)
    {
        public Invoice Load(int id)
        {
            logger.LogInformation(\"loading {Id}\", id);
            return invoices.Find(id);
        }
    }
"};

pub fn type_names(result: &respmap::AnalysisResult) -> Vec<&str> {
    result
        .dependencies
        .iter()
        .map(|dependency| dependency.type_name.as_str())
        .collect()
}

/// Remove every `<...>` tag from highlighted markup.
pub fn strip_tags(markup: &str) -> String {
    let mut plain = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => plain.push(ch),
            _ => {}
        }
    }
    plain
}
