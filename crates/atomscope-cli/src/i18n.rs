//! Display strings for the dashboard and console output.
//!
//! `t` is a pure lookup; an unknown key comes back unchanged so a missing
//! translation is visible instead of blank.

use crate::types::Language;

type Table = &'static [(&'static str, &'static str)];

const EN: Table = &[
    ("app.title", "Atomscope"),
    ("tab.top", "Top"),
    ("tab.trending", "Trending"),
    ("tab.positions", "My positions"),
    ("tab.explorer", "Explorer"),
    ("col.rank", "#"),
    ("col.atom", "Atom"),
    ("col.market_cap", "Market cap"),
    ("col.share_price", "Share price"),
    ("col.positions", "Positions"),
    ("col.created", "Created"),
    ("col.growth", "Growth"),
    ("col.confidence", "Confidence"),
    ("col.kind", "Type"),
    ("col.shares", "Shares"),
    ("col.value", "Value"),
    ("col.pnl", "P&L"),
    ("status.loading", "Loading..."),
    ("status.syncing", "Synchronizing..."),
    ("status.retry", "press r to retry"),
    ("empty.atoms", "No atoms to show"),
    ("empty.search", "No atoms match this search"),
    ("empty.wallet", "Connect a wallet (c) to see your positions"),
    ("empty.positions", "No positions for this address"),
    ("empty.history", "No history for this period"),
    ("empty.explorer", "Enter a wallet address (i) to explore its positions"),
    ("wallet.connected", "Wallet"),
    ("wallet.disconnected", "No wallet"),
    ("wallet.wrong_network", "Wrong network"),
    ("filter.title", "Filters"),
    ("filter.sort_by", "Sort by"),
    ("filter.order", "Order"),
    ("filter.min_market_cap", "Min market cap"),
    ("filter.max_market_cap", "Max market cap"),
    ("filter.min_share_price", "Min share price"),
    ("filter.max_share_price", "Max share price"),
    ("filter.active", "filters active"),
    ("order.asc", "ascending"),
    ("order.desc", "descending"),
    ("sort.market_cap", "market cap"),
    ("sort.share_price", "share price"),
    ("sort.positions_count", "positions"),
    ("sort.created_at", "creation date"),
    ("search.prompt", "Search"),
    ("search.results", "Results for"),
    ("explorer.prompt", "Address"),
    ("period.label", "Period"),
    ("limit.label", "Limit"),
    ("sync.title", "Synchronization"),
    ("sync.success", "Synchronization complete"),
    ("sync.failure", "Synchronization failed"),
    ("sync.added", "atoms synchronized"),
    ("sync.coverage", "coverage"),
    ("detail.did", "DID"),
    ("detail.type", "Type"),
    ("detail.creator", "Creator"),
    ("detail.confidence", "Confidence"),
    ("detail.triples", "Triples"),
    ("detail.history", "History"),
    ("detail.signal", "Signal"),
    ("detail.price", "Price"),
    ("detail.points", "samples"),
    ("confidence.high", "High"),
    ("confidence.medium", "Medium"),
    ("confidence.low", "Low"),
    ("kind.atom", "atom"),
    ("kind.triple", "triple"),
    ("modal.dismiss", "Enter to close"),
    (
        "help.dashboard",
        "1-4 tabs  p period  l/L limit  / search  f filters  s sync  c wallet  Enter open  q quit",
    ),
    ("help.filters", "Up/Down field  Left/Right change  type to edit  x reset  Esc close"),
    ("help.detail", "p period  r retry  b back  q quit"),
];

const FR: Table = &[
    ("app.title", "Atomscope"),
    ("tab.top", "Top"),
    ("tab.trending", "Tendances"),
    ("tab.positions", "Mes positions"),
    ("tab.explorer", "Explorateur"),
    ("col.rank", "#"),
    ("col.atom", "Atom"),
    ("col.market_cap", "Capitalisation"),
    ("col.share_price", "Prix de la part"),
    ("col.positions", "Positions"),
    ("col.created", "Créé le"),
    ("col.growth", "Croissance"),
    ("col.confidence", "Confiance"),
    ("col.kind", "Type"),
    ("col.shares", "Parts"),
    ("col.value", "Valeur"),
    ("col.pnl", "P&L"),
    ("status.loading", "Chargement..."),
    ("status.syncing", "Synchronisation..."),
    ("status.retry", "appuyez sur r pour réessayer"),
    ("empty.atoms", "Aucun atom à afficher"),
    ("empty.search", "Aucun atom ne correspond à cette recherche"),
    ("empty.wallet", "Connectez un wallet (c) pour voir vos positions"),
    ("empty.positions", "Aucune position pour cette adresse"),
    ("empty.history", "Aucun historique pour cette période"),
    ("empty.explorer", "Saisissez une adresse (i) pour explorer ses positions"),
    ("wallet.connected", "Wallet"),
    ("wallet.disconnected", "Aucun wallet"),
    ("wallet.wrong_network", "Mauvais réseau"),
    ("filter.title", "Filtres"),
    ("filter.sort_by", "Trier par"),
    ("filter.order", "Ordre"),
    ("filter.min_market_cap", "Capitalisation min"),
    ("filter.max_market_cap", "Capitalisation max"),
    ("filter.min_share_price", "Prix min"),
    ("filter.max_share_price", "Prix max"),
    ("filter.active", "filtres actifs"),
    ("order.asc", "croissant"),
    ("order.desc", "décroissant"),
    ("sort.market_cap", "capitalisation"),
    ("sort.share_price", "prix de la part"),
    ("sort.positions_count", "positions"),
    ("sort.created_at", "date de création"),
    ("search.prompt", "Rechercher"),
    ("search.results", "Résultats pour"),
    ("explorer.prompt", "Adresse"),
    ("period.label", "Période"),
    ("limit.label", "Limite"),
    ("sync.title", "Synchronisation"),
    ("sync.success", "Synchronisation terminée"),
    ("sync.failure", "Erreur lors de la synchronisation"),
    ("sync.added", "atoms synchronisés"),
    ("sync.coverage", "couverture"),
    ("detail.did", "DID"),
    ("detail.type", "Type"),
    ("detail.creator", "Créateur"),
    ("detail.confidence", "Confiance"),
    ("detail.triples", "Triples"),
    ("detail.history", "Historique"),
    ("detail.signal", "Signal"),
    ("detail.price", "Prix"),
    ("detail.points", "points"),
    ("confidence.high", "Élevée"),
    ("confidence.medium", "Moyenne"),
    ("confidence.low", "Faible"),
    ("kind.atom", "atom"),
    ("kind.triple", "triple"),
    ("modal.dismiss", "Entrée pour fermer"),
    (
        "help.dashboard",
        "1-4 onglets  p période  l/L limite  / recherche  f filtres  s sync  c wallet  Entrée ouvrir  q quitter",
    ),
    ("help.filters", "Haut/Bas champ  Gauche/Droite changer  saisir pour éditer  x réinitialiser  Échap fermer"),
    ("help.detail", "p période  r réessayer  b retour  q quitter"),
];

pub fn t(lang: Language, key: &'static str) -> &'static str {
    let table = match lang {
        Language::En => EN,
        Language::Fr => FR,
    };
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}
